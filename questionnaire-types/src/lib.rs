//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational, presentation-agnostic types:
//! - `Questionnaire` and `Question` - The validated question list
//! - `Answer`, `AnswerSet` and `CompletedAnswers` - Collected selections
//! - `QuestionView`, `Advance` and `UserAction` - What front ends render and report
//! - `Presenter` and `SubmissionHandler` traits - For front ends and submission targets

mod question;
pub use question::Question;

mod questionnaire;
pub use questionnaire::Questionnaire;

mod answer;
pub use answer::Answer;

mod answer_set;
pub use answer_set::{AnswerSet, CompletedAnswers, SubmittedAnswer};

mod view;
pub use view::{Advance, QuestionView, UserAction};

mod error;
pub use error::{DefinitionError, QuestionnaireError, SessionError, SubmitError};

mod traits;
pub use traits::{Presenter, SubmissionHandler};
