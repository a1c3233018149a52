//! # questionnaire-dialoguer
//!
//! Dialoguer presentation layer for questionnaire.
//!
//! Each question is a `Select` prompt listing its options followed by the
//! navigation entries "Previous" and "Next" (or "Submit" on the last question).
//! The forward entry is marked as unavailable until the question is answered.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use questionnaire::{RecordingSubmitter, Session};
//! use questionnaire_dialoguer::DialoguerPresenter;
//!
//! let answers = Session::new(questionnaire()).run(DialoguerPresenter::new(), RecordingSubmitter::new())?;
//! ```

use dialoguer::{Select, theme::ColorfulTheme};
use questionnaire::{CompletedAnswers, Presenter, QuestionView, Questionnaire, UserAction};

/// Error type for the dialoguer presenter.
#[derive(Debug, thiserror::Error)]
pub enum DialoguerError {
    #[error("Failed to prompt: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// One line of the menu shown for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    Option(usize),
    Previous,
    Forward,
}

const ANSWER_REQUIRED: &str = "Select an option first";

/// dialoguer-based presenter.
#[derive(Debug, Default)]
pub struct DialoguerPresenter;

impl DialoguerPresenter {
    pub fn new() -> Self {
        Self
    }

    fn menu(view: &QuestionView<'_>) -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = (0..view.question.options().len())
            .map(MenuEntry::Option)
            .collect();
        if view.can_go_back() {
            entries.push(MenuEntry::Previous);
        }
        entries.push(MenuEntry::Forward);
        entries
    }

    fn label(entry: MenuEntry, view: &QuestionView<'_>) -> String {
        match entry {
            MenuEntry::Option(i) => {
                let marker = if view.selected_index() == Some(i) { "●" } else { "○" };
                format!("{} {}", marker, view.question.options()[i])
            }
            MenuEntry::Previous => "← Previous".to_string(),
            MenuEntry::Forward if view.can_go_forward() => format!("→ {}", view.forward_label()),
            MenuEntry::Forward => format!("→ {} (answer required)", view.forward_label()),
        }
    }

    /// Translate a menu pick into an action. `Err` carries a hint when the
    /// pick is a disabled control.
    fn action(entry: MenuEntry, view: &QuestionView<'_>) -> Result<UserAction, &'static str> {
        match entry {
            MenuEntry::Option(i) => Ok(UserAction::Select(i)),
            MenuEntry::Previous => Ok(UserAction::Previous),
            MenuEntry::Forward if view.can_go_forward() => Ok(UserAction::Next),
            MenuEntry::Forward => Err(ANSWER_REQUIRED),
        }
    }

    /// Menu line the cursor starts on: the forward entry once answered, the first option otherwise.
    fn default_entry(entries: &[MenuEntry], view: &QuestionView<'_>) -> usize {
        if view.can_go_forward() {
            entries.len() - 1
        } else {
            0
        }
    }
}

impl Presenter for DialoguerPresenter {
    type Error = DialoguerError;

    fn begin(&mut self, questionnaire: &Questionnaire) -> Result<(), Self::Error> {
        if let Some(title) = questionnaire.title() {
            println!("=== {} ===", title);
        }
        if let Some(prelude) = questionnaire.prelude() {
            println!("{}", prelude);
        }
        Ok(())
    }

    fn next_action(
        &mut self,
        view: &QuestionView<'_>,
        notice: Option<&str>,
    ) -> Result<UserAction, Self::Error> {
        if let Some(notice) = notice {
            println!("! {}", notice);
        }

        let entries = Self::menu(view);
        let labels: Vec<String> = entries.iter().map(|&e| Self::label(e, view)).collect();
        let (current, total) = view.progress();
        let theme = ColorfulTheme::default();

        loop {
            let selection = Select::with_theme(&theme)
                .with_prompt(format!("[{}/{}] {}", current, total, view.question.text()))
                .items(&labels)
                .default(Self::default_entry(&entries, view))
                .interact_opt()?;

            let Some(selection) = selection else {
                return Ok(UserAction::Quit);
            };

            match Self::action(entries[selection], view) {
                Ok(action) => return Ok(action),
                Err(hint) => println!("! {}", hint),
            }
        }
    }

    fn finish(
        &mut self,
        questionnaire: &Questionnaire,
        answers: &CompletedAnswers,
    ) -> Result<(), Self::Error> {
        for entry in answers.entries() {
            println!("  {} {}", entry.question, entry.answer);
        }
        if let Some(epilogue) = questionnaire.epilogue() {
            println!("{}", epilogue);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::{Answer, Question};

    fn goal() -> Question {
        Question::new(
            "What is your goal for this season?",
            ["Complete a race", "Improve my performance", "Maintain my fitness"],
        )
    }

    #[test]
    fn first_question_has_no_previous_entry() {
        let question = goal();
        let answer = Answer::Unanswered;
        let view = QuestionView {
            position: 0,
            total: 3,
            question: &question,
            answer: &answer,
        };

        let entries = DialoguerPresenter::menu(&view);
        assert_eq!(entries.len(), 4);
        assert!(!entries.contains(&MenuEntry::Previous));
        assert_eq!(
            DialoguerPresenter::label(MenuEntry::Forward, &view),
            "→ Next (answer required)"
        );
        assert_eq!(DialoguerPresenter::default_entry(&entries, &view), 0);
    }

    #[test]
    fn forward_entry_is_rejected_until_answered() {
        let question = goal();
        let unanswered = Answer::Unanswered;
        let answered = Answer::from("Improve my performance");
        let blank = QuestionView {
            position: 2,
            total: 3,
            question: &question,
            answer: &unanswered,
        };
        let ready = QuestionView {
            answer: &answered,
            ..blank
        };

        assert_eq!(
            DialoguerPresenter::action(MenuEntry::Forward, &blank),
            Err(ANSWER_REQUIRED)
        );
        assert_eq!(
            DialoguerPresenter::action(MenuEntry::Forward, &ready),
            Ok(UserAction::Next)
        );
        assert_eq!(
            DialoguerPresenter::label(MenuEntry::Forward, &ready),
            "→ Submit"
        );
        assert_eq!(
            DialoguerPresenter::label(MenuEntry::Option(1), &ready),
            "● Improve my performance"
        );
        assert_eq!(
            DialoguerPresenter::label(MenuEntry::Option(0), &ready),
            "○ Complete a race"
        );

        let entries = DialoguerPresenter::menu(&ready);
        assert_eq!(
            entries,
            vec![
                MenuEntry::Option(0),
                MenuEntry::Option(1),
                MenuEntry::Option(2),
                MenuEntry::Previous,
                MenuEntry::Forward,
            ]
        );
        assert_eq!(DialoguerPresenter::default_entry(&entries, &ready), 4);
    }

    #[test]
    fn error_message() {
        let err = DialoguerError::Prompt(dialoguer::Error::IO(std::io::Error::other("closed")));
        assert!(err.to_string().starts_with("Failed to prompt: "));
        assert!(err.to_string().ends_with("closed"));
    }
}
