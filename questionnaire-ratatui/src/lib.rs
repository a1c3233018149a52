//! # questionnaire-ratatui
//!
//! Ratatui presentation layer for questionnaire.
//!
//! Shows one question at a time in a full-screen terminal UI: the question,
//! its options with the current selection highlighted, and Previous /
//! Next (or Submit) buttons. The forward button is greyed out until the
//! question is answered.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use questionnaire::{RecordingSubmitter, Session};
//! use questionnaire_ratatui::RatatuiPresenter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let presenter = RatatuiPresenter::new().with_title("TriTracker");
//!     let answers = Session::new(questionnaire()).run(presenter, RecordingSubmitter::new())?;
//!     println!("{answers:#?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{Focus, RatatuiError, RatatuiPresenter, Theme};
