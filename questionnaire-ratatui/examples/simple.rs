//! Simple example demonstrating the ratatui presenter.
//!
//! Run with: cargo run -p questionnaire-ratatui --example simple

use questionnaire::{Question, Questionnaire, RecordingSubmitter, Session};
use questionnaire_ratatui::RatatuiPresenter;

fn main() -> anyhow::Result<()> {
    let questionnaire = Questionnaire::new(vec![
        Question::new("Tea or coffee?", ["Tea", "Coffee"]),
        Question::new("How do you take it?", ["Black", "With milk", "With sugar"]),
    ])?
    .with_epilogue("Thanks, your order is in.");

    let presenter = RatatuiPresenter::new().with_title("Breakfast Survey");
    let answers = Session::new(questionnaire).run(presenter, RecordingSubmitter::new())?;

    println!("\n=== Order ===");
    for entry in answers.entries() {
        println!("{}: {}", entry.question, entry.answer);
    }

    Ok(())
}
