//! Integration tests for questionnaire

use questionnaire::{
    Advance, Question, Questionnaire, QuestionnaireController, QuestionnaireError,
    RecordingSubmitter, ScriptedPresenter, Session, UserAction,
};

fn fitness() -> Questionnaire {
    Questionnaire::new(vec![
        Question::new(
            "What is your current fitness level?",
            ["Beginner", "Intermediate", "Advanced"],
        ),
        Question::new("What is your primary sport?", ["Running", "Cycling", "Swimming"]),
        Question::new(
            "What is your goal for this season?",
            ["Complete a race", "Improve my performance", "Maintain my fitness"],
        ),
    ])
    .unwrap()
}

#[test]
fn test_full_walkthrough_with_controller() {
    let mut controller = QuestionnaireController::new(fitness());

    controller.select_current("Advanced").unwrap();
    assert_eq!(controller.go_to_next(), Ok(Advance::Moved(1)));

    controller.select_current("Cycling").unwrap();
    assert_eq!(controller.go_to_next(), Ok(Advance::Moved(2)));

    assert_eq!(
        controller.go_to_next(),
        Err(QuestionnaireError::IncompleteAnswer { index: 2 })
    );
    assert!(!controller.can_go_forward());

    controller.select_current("Improve my performance").unwrap();
    assert_eq!(controller.go_to_next(), Ok(Advance::Submit));

    let mut submitter = RecordingSubmitter::new();
    let answers = controller.submit(&mut submitter).unwrap();

    assert_eq!(
        answers.options(),
        vec!["Advanced", "Cycling", "Improve my performance"]
    );
    assert_eq!(submitter.last(), Some(&answers));
}

#[test]
fn test_full_walkthrough_with_session() {
    let mut presenter = ScriptedPresenter::new([
        UserAction::Select(2),
        UserAction::Next,
        UserAction::Select(1),
        UserAction::Next,
        UserAction::Next,
        UserAction::Select(1),
        UserAction::Next,
    ]);
    let mut submitter = RecordingSubmitter::new();

    let answers = Session::new(fitness())
        .run(&mut presenter, &mut submitter)
        .unwrap();

    assert_eq!(
        answers.options(),
        vec!["Advanced", "Cycling", "Improve my performance"]
    );
    assert_eq!(
        presenter.notices(),
        ["Question 3 must be answered before moving on".to_string()]
    );
    assert_eq!(presenter.remaining(), 0);
}

#[test]
fn test_answers_survive_back_and_forth() {
    let mut controller = QuestionnaireController::new(fitness());
    controller.select_current("Beginner").unwrap();
    controller.go_to_next().unwrap();
    controller.select_current("Swimming").unwrap();

    controller.go_to_previous();
    controller.go_to_previous();
    controller.go_to_previous();
    assert_eq!(controller.position(), 0);
    assert_eq!(controller.current_question().answer.as_str(), Some("Beginner"));

    controller.go_to_next().unwrap();
    assert_eq!(controller.current_question().answer.as_str(), Some("Swimming"));
    assert_eq!(
        controller.answers().selections(),
        vec![Some("Beginner"), Some("Swimming"), None]
    );
}

#[test]
fn test_submitted_entries_pair_question_and_answer() {
    let mut controller = QuestionnaireController::new(
        Questionnaire::new(vec![Question::new("Ready?", ["yes", "no"])]).unwrap(),
    );
    controller.select_current("no").unwrap();

    let answers = controller.submit(RecordingSubmitter::new()).unwrap();
    let entries = answers.entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].question, "Ready?");
    assert_eq!(entries[0].answer, "no");
}
