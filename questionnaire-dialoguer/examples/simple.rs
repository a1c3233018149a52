//! Simple example demonstrating the dialoguer presenter.
//!
//! Run with: cargo run -p questionnaire-dialoguer --example simple

use questionnaire::{Question, Questionnaire, RecordingSubmitter, Session};
use questionnaire_dialoguer::DialoguerPresenter;

fn main() -> anyhow::Result<()> {
    let questionnaire = Questionnaire::new(vec![
        Question::new("Which editor do you use?", ["Vim", "Emacs", "Helix", "Other"]),
        Question::new("Tabs or spaces?", ["Tabs", "Spaces"]),
    ])?
    .with_title("Editor Survey");

    let mut submitter = RecordingSubmitter::new();
    Session::new(questionnaire).run(DialoguerPresenter::new(), &mut submitter)?;

    println!("Recorded {} submission(s)", submitter.submissions().len());
    Ok(())
}
