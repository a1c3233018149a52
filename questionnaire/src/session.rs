use crate::{
    Advance, CompletedAnswers, Presenter, QuestionnaireController, Questionnaire, SessionError,
    SubmissionHandler, SubmitError, UserAction,
};

/// One run of a questionnaire: a controller wired to a presenter and a submission handler.
///
/// The session asks the presenter for user actions, applies them to the
/// controller, and reports rejected actions back as a notice on the next
/// render. It ends when the answers are submitted or the user quits.
#[derive(Debug, Clone)]
pub struct Session {
    controller: QuestionnaireController,
}

impl Session {
    /// Create a session positioned on the first question.
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            controller: QuestionnaireController::new(questionnaire),
        }
    }

    /// Get the underlying controller.
    pub fn controller(&self) -> &QuestionnaireController {
        &self.controller
    }

    /// Run the session to completion.
    ///
    /// Returns the submitted answers, or [`SessionError::Abandoned`] if the user quit.
    /// A failing submission handler does not end the session; the failure is shown
    /// to the user, who can submit again or quit. `Presenter::end` is called on every
    /// exit path.
    pub fn run<P, H>(
        mut self,
        mut presenter: P,
        mut handler: H,
    ) -> Result<CompletedAnswers, SessionError>
    where
        P: Presenter,
        H: SubmissionHandler,
    {
        let result = presenter
            .begin(self.controller.questionnaire())
            .map_err(SessionError::presenter)
            .and_then(|()| self.drive(&mut presenter, &mut handler));
        let ended = presenter.end().map_err(SessionError::presenter);

        let answers = result?;
        ended?;
        Ok(answers)
    }

    fn drive<P, H>(
        &mut self,
        presenter: &mut P,
        handler: &mut H,
    ) -> Result<CompletedAnswers, SessionError>
    where
        P: Presenter,
        H: SubmissionHandler,
    {
        let mut notice: Option<String> = None;

        loop {
            let action = presenter
                .next_action(&self.controller.current_question(), notice.as_deref())
                .map_err(SessionError::presenter)?;
            notice = None;

            match action {
                UserAction::Select(option_index) => {
                    if let Err(err) = self.controller.select_current_index(option_index) {
                        notice = Some(err.to_string());
                    }
                }
                UserAction::Previous => self.controller.go_to_previous(),
                UserAction::Next => match self.controller.go_to_next() {
                    Ok(Advance::Moved(_)) => {}
                    Ok(Advance::Submit) => match self.controller.submit(&mut *handler) {
                        Ok(answers) => {
                            // Already submitted, so `finish` is best-effort.
                            if let Err(err) =
                                presenter.finish(self.controller.questionnaire(), &answers)
                            {
                                let err: anyhow::Error = err.into();
                                tracing::warn!(error = %err, "presenter failed to show the summary");
                            }
                            return Ok(answers);
                        }
                        Err(err @ SubmitError::Handler(_)) => notice = Some(err.to_string()),
                        Err(err) => return Err(err.into()),
                    },
                    Err(err) => notice = Some(err.to_string()),
                },
                UserAction::Quit => {
                    tracing::info!(
                        position = self.controller.position(),
                        answered = self.controller.answers().answered_count(),
                        "questionnaire abandoned"
                    );
                    return Err(SessionError::Abandoned);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Question, RecordingSubmitter, ScriptedPresenter};

    fn two_questions() -> Questionnaire {
        Questionnaire::new(vec![
            Question::new("Level?", ["Beginner", "Advanced"]),
            Question::new("Sport?", ["Running", "Cycling"]),
        ])
        .unwrap()
    }

    #[test]
    fn rejected_actions_become_notices() {
        let mut presenter = ScriptedPresenter::new([
            UserAction::Next,
            UserAction::Select(5),
            UserAction::Select(0),
            UserAction::Next,
            UserAction::Select(1),
            UserAction::Next,
        ]);
        let mut submitter = RecordingSubmitter::new();

        let answers = Session::new(two_questions())
            .run(&mut presenter, &mut submitter)
            .unwrap();

        assert_eq!(answers.options(), vec!["Beginner", "Cycling"]);
        assert_eq!(
            presenter.notices(),
            [
                "Question 1 must be answered before moving on".to_string(),
                "'#6' is not an option of question 1".to_string(),
            ]
        );
        assert!(presenter.began() && presenter.finished() && presenter.ended());
    }

    #[test]
    fn quitting_abandons_and_still_ends_presenter() {
        let mut presenter = ScriptedPresenter::new([UserAction::Select(1), UserAction::Quit]);
        let mut submitter = RecordingSubmitter::new();

        let err = Session::new(two_questions())
            .run(&mut presenter, &mut submitter)
            .unwrap_err();

        assert!(err.is_abandoned());
        assert!(presenter.ended());
        assert!(!presenter.finished());
        assert!(submitter.submissions().is_empty());
    }

    #[test]
    fn handler_failure_is_shown_and_retried() {
        let mut presenter = ScriptedPresenter::new([
            UserAction::Select(1),
            UserAction::Next,
            UserAction::Select(0),
            UserAction::Next,
            UserAction::Next,
        ]);
        let mut submitter = RecordingSubmitter::failing_times(1);

        let answers = Session::new(two_questions())
            .run(&mut presenter, &mut submitter)
            .unwrap();

        assert_eq!(answers.options(), vec!["Advanced", "Running"]);
        assert_eq!(presenter.notices().len(), 1);
        assert!(presenter.notices()[0].starts_with("Submission failed"));
        assert_eq!(submitter.submissions().len(), 1);
    }

    /// Answers the single question, then fails to show the summary.
    struct BrokenSummary {
        actions: Vec<UserAction>,
        ended: bool,
    }

    impl Presenter for BrokenSummary {
        type Error = std::io::Error;

        fn next_action(
            &mut self,
            _view: &crate::QuestionView<'_>,
            _notice: Option<&str>,
        ) -> Result<UserAction, Self::Error> {
            Ok(self.actions.pop().unwrap_or(UserAction::Quit))
        }

        fn finish(
            &mut self,
            _questionnaire: &Questionnaire,
            _answers: &CompletedAnswers,
        ) -> Result<(), Self::Error> {
            Err(std::io::Error::other("summary screen unavailable"))
        }

        fn end(&mut self) -> Result<(), Self::Error> {
            self.ended = true;
            Ok(())
        }
    }

    #[test]
    fn failing_summary_keeps_submitted_answers() {
        let mut presenter = BrokenSummary {
            actions: vec![UserAction::Next, UserAction::Select(0)],
            ended: false,
        };
        let mut submitter = RecordingSubmitter::new();

        let answers = Session::new(
            Questionnaire::new(vec![Question::new("Ready?", ["yes", "no"])]).unwrap(),
        )
        .run(&mut presenter, &mut submitter)
        .unwrap();

        assert_eq!(answers.options(), vec!["yes"]);
        assert_eq!(submitter.last(), Some(&answers));
        assert!(presenter.ended);
    }

    #[test]
    fn previous_round_trip_keeps_selection() {
        let mut presenter = ScriptedPresenter::new([
            UserAction::Previous,
            UserAction::Select(1),
            UserAction::Next,
            UserAction::Previous,
            UserAction::Next,
            UserAction::Select(0),
            UserAction::Next,
        ]);

        let answers = Session::new(two_questions())
            .run(&mut presenter, RecordingSubmitter::new())
            .unwrap();

        assert_eq!(presenter.positions(), [0, 0, 0, 1, 0, 1, 1]);
        assert_eq!(answers.options(), vec!["Advanced", "Running"]);
    }
}
