use crate::{CompletedAnswers, QuestionView, Questionnaire, UserAction};

/// Trait for presentation layers that drive a questionnaire session.
///
/// A presenter renders the current question and turns user input into
/// [`UserAction`]s. It never mutates answers itself; the session applies each
/// action to the controller and re-renders.
pub trait Presenter {
    /// The error type for this presenter.
    type Error: Into<anyhow::Error>;

    /// Called once before the first question is shown (terminal setup, prelude).
    fn begin(&mut self, _questionnaire: &Questionnaire) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Render `view` and wait for the next user action.
    ///
    /// # Arguments
    /// * `view` - The current question and its recorded answer
    /// * `notice` - Why the previous action was rejected, if it was
    fn next_action(
        &mut self,
        view: &QuestionView<'_>,
        notice: Option<&str>,
    ) -> Result<UserAction, Self::Error>;

    /// Called after a successful submission (epilogue, summary).
    ///
    /// The answers are already submitted; a session only logs an error from here.
    fn finish(
        &mut self,
        _questionnaire: &Questionnaire,
        _answers: &CompletedAnswers,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when the session ends for any reason. Must restore any terminal state.
    fn end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Trait for the collaborator that receives a completed questionnaire.
///
/// Invoked once the user submits from the final question. Returning an error
/// keeps the questionnaire open so the user can try again.
pub trait SubmissionHandler {
    /// The error type for this handler.
    type Error: Into<anyhow::Error>;

    /// Accept the completed answers.
    fn submit(&mut self, answers: &CompletedAnswers) -> Result<(), Self::Error>;
}

impl<H: SubmissionHandler + ?Sized> SubmissionHandler for &mut H {
    type Error = H::Error;

    fn submit(&mut self, answers: &CompletedAnswers) -> Result<(), Self::Error> {
        (**self).submit(answers)
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    type Error = P::Error;

    fn begin(&mut self, questionnaire: &Questionnaire) -> Result<(), Self::Error> {
        (**self).begin(questionnaire)
    }

    fn next_action(
        &mut self,
        view: &QuestionView<'_>,
        notice: Option<&str>,
    ) -> Result<UserAction, Self::Error> {
        (**self).next_action(view, notice)
    }

    fn finish(
        &mut self,
        questionnaire: &Questionnaire,
        answers: &CompletedAnswers,
    ) -> Result<(), Self::Error> {
        (**self).finish(questionnaire, answers)
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        (**self).end()
    }
}
