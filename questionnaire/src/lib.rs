//! # questionnaire
//!
//! Single-select, one-question-at-a-time questionnaires. Presentation-agnostic.
//!
//! The core is [`QuestionnaireController`], a small state machine holding the
//! questions, the current position and the recorded answers. Forward navigation
//! is refused until the question on screen is answered, and moving forward from
//! the last question signals submission instead of advancing.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Advance, Question, Questionnaire, QuestionnaireController};
//!
//! let questionnaire = Questionnaire::new(vec![
//!     Question::new("What is your current fitness level?", ["Beginner", "Intermediate", "Advanced"]),
//!     Question::new("What is your primary sport?", ["Running", "Cycling", "Swimming"]),
//! ])
//! .unwrap();
//!
//! let mut controller = QuestionnaireController::new(questionnaire);
//! assert!(controller.go_to_next().is_err());
//!
//! controller.select_current("Advanced").unwrap();
//! assert_eq!(controller.go_to_next(), Ok(Advance::Moved(1)));
//!
//! controller.select_current("Cycling").unwrap();
//! assert_eq!(controller.go_to_next(), Ok(Advance::Submit));
//! ```
//!
//! ## Front ends
//!
//! Front ends are separate crates that implement `Presenter`:
//! - `questionnaire-ratatui` - Full-screen TUI
//! - `questionnaire-dialoguer` - CLI prompts via dialoguer
//!
//! A [`Session`] wires a presenter and a `SubmissionHandler` to a controller.

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod controller;
pub use controller::QuestionnaireController;

mod session;
pub use session::Session;

// Test doubles for driving sessions without user interaction
mod test_support;
pub use test_support::{RecordingSubmitter, RecordingSubmitterError, ScriptedPresenter};
