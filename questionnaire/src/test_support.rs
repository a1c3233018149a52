//! Test doubles for running questionnaires without user interaction.
//!
//! `ScriptedPresenter` replays a fixed list of user actions, and
//! `RecordingSubmitter` keeps every submission it receives. Together they let
//! you drive a full [`Session`](crate::Session) from a test.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{
//!     Question, Questionnaire, RecordingSubmitter, ScriptedPresenter, Session, UserAction,
//! };
//!
//! let questionnaire = Questionnaire::new(vec![
//!     Question::new("Primary sport?", ["Running", "Cycling", "Swimming"]),
//! ])
//! .unwrap();
//!
//! let mut presenter = ScriptedPresenter::new([UserAction::Select(1), UserAction::Next]);
//! let mut submitter = RecordingSubmitter::new();
//!
//! let answers = Session::new(questionnaire)
//!     .run(&mut presenter, &mut submitter)
//!     .unwrap();
//!
//! assert_eq!(answers.options(), vec!["Cycling"]);
//! assert_eq!(submitter.submissions().len(), 1);
//! ```

use std::collections::VecDeque;

use crate::{CompletedAnswers, Presenter, QuestionView, Questionnaire, SubmissionHandler, UserAction};

/// A presenter that returns pre-configured actions.
///
/// When the script runs out it reports [`UserAction::Quit`], so an incomplete
/// script ends the session as abandoned instead of looping forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPresenter {
    actions: VecDeque<UserAction>,
    notices: Vec<String>,
    positions: Vec<usize>,
    began: bool,
    finished: bool,
    ended: bool,
}

impl ScriptedPresenter {
    /// Create a presenter that replays `actions` in order.
    pub fn new(actions: impl IntoIterator<Item = UserAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Append an action to the script.
    pub fn then(mut self, action: UserAction) -> Self {
        self.actions.push_back(action);
        self
    }

    /// Notices the session showed, in order.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Position of the question on screen each time an action was requested.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Actions not consumed yet.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }

    pub fn began(&self) -> bool {
        self.began
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl Presenter for ScriptedPresenter {
    type Error = std::convert::Infallible;

    fn begin(&mut self, _questionnaire: &Questionnaire) -> Result<(), Self::Error> {
        self.began = true;
        Ok(())
    }

    fn next_action(
        &mut self,
        view: &QuestionView<'_>,
        notice: Option<&str>,
    ) -> Result<UserAction, Self::Error> {
        if let Some(notice) = notice {
            self.notices.push(notice.to_string());
        }
        self.positions.push(view.position);
        Ok(self.actions.pop_front().unwrap_or(UserAction::Quit))
    }

    fn finish(
        &mut self,
        _questionnaire: &Questionnaire,
        _answers: &CompletedAnswers,
    ) -> Result<(), Self::Error> {
        self.finished = true;
        Ok(())
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        self.ended = true;
        Ok(())
    }
}

/// A submission handler that records every submission.
#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    submissions: Vec<CompletedAnswers>,
    failures_left: usize,
}

/// Error type for RecordingSubmitter.
#[derive(Debug, thiserror::Error)]
#[error("Submission rejected by recording submitter ({remaining} more failures scripted)")]
pub struct RecordingSubmitterError {
    remaining: usize,
}

impl RecordingSubmitter {
    /// Create a submitter that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submitter that fails the first `times` submissions.
    pub fn failing_times(times: usize) -> Self {
        Self {
            submissions: Vec::new(),
            failures_left: times,
        }
    }

    /// Accepted submissions, in order.
    pub fn submissions(&self) -> &[CompletedAnswers] {
        &self.submissions
    }

    /// The most recent accepted submission.
    pub fn last(&self) -> Option<&CompletedAnswers> {
        self.submissions.last()
    }
}

impl SubmissionHandler for RecordingSubmitter {
    type Error = RecordingSubmitterError;

    fn submit(&mut self, answers: &CompletedAnswers) -> Result<(), Self::Error> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(RecordingSubmitterError {
                remaining: self.failures_left,
            });
        }
        self.submissions.push(answers.clone());
        Ok(())
    }
}
