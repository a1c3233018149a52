//! The questionnaire TriTracker asks when no definition file is given.

use questionnaire::{DefinitionError, Question, Questionnaire};

pub(crate) fn questionnaire() -> Result<Questionnaire, DefinitionError> {
    let questionnaire = Questionnaire::new(vec![
        Question::new(
            "What is your current fitness level?",
            ["Beginner", "Intermediate", "Advanced"],
        ),
        Question::new("What is your primary sport?", ["Running", "Cycling", "Swimming"]),
        Question::new(
            "What is your goal for this season?",
            ["Complete a race", "Improve my performance", "Maintain my fitness"],
        ),
    ])?
    .with_title("TriTracker")
    .with_prelude("A few questions to shape your training plan for the season.")
    .with_epilogue("Thanks! Your answers have been recorded.");

    Ok(questionnaire)
}
