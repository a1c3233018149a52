//! The questionnaire state machine.
//!
//! States are the question positions `0..N` plus a terminal "submitted" state.
//! Transitions:
//! - `previous`: position - 1, ignored at position 0
//! - `next`: position + 1, requires an answer and a following question
//! - `submit`: terminal, requires an answer on the last question
//!
//! Only [`QuestionnaireController::select_option`] (and its convenience
//! wrappers) mutate answers.

use questionnaire_types::{
    Advance, Answer, AnswerSet, CompletedAnswers, QuestionView, Questionnaire,
    QuestionnaireError, SubmissionHandler, SubmitError,
};

/// Owns the state of one questionnaire session.
#[derive(Debug, Clone)]
pub struct QuestionnaireController {
    questionnaire: Questionnaire,
    answers: AnswerSet,
    position: usize,
    submitted: bool,
}

impl QuestionnaireController {
    /// Start a session at the first question with every answer unset.
    pub fn new(questionnaire: Questionnaire) -> Self {
        let answers = AnswerSet::unanswered(questionnaire.len());
        Self {
            questionnaire,
            answers,
            position: 0,
            submitted: false,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Zero-based index of the displayed question.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questionnaire.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questionnaire.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.position == self.questionnaire.last_index()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether the forward control (Next / Submit) should be enabled.
    pub fn can_go_forward(&self) -> bool {
        !self.submitted && self.current_answer().is_selected()
    }

    /// Label for the forward control on the current question.
    pub fn forward_label(&self) -> &'static str {
        self.current_question().forward_label()
    }

    /// The question at the current position with its recorded answer.
    pub fn current_question(&self) -> QuestionView<'_> {
        QuestionView {
            position: self.position,
            total: self.questionnaire.len(),
            question: &self.questionnaire.questions()[self.position],
            answer: self.current_answer(),
        }
    }

    fn current_answer(&self) -> &Answer {
        &self.answers.as_slice()[self.position]
    }

    /// Record `option` as the answer for question `index`, replacing any previous answer.
    pub fn select_option(&mut self, index: usize, option: &str) -> Result<(), QuestionnaireError> {
        self.ensure_open()?;

        let question =
            self.questionnaire
                .question(index)
                .ok_or(QuestionnaireError::IndexOutOfRange {
                    index,
                    len: self.questionnaire.len(),
                })?;

        if !question.has_option(option) {
            tracing::debug!(index, option, "rejected option outside the question's option set");
            return Err(QuestionnaireError::InvalidOption {
                index,
                option: option.to_string(),
            });
        }

        self.answers.set(index, option);
        tracing::debug!(index, option, "answer recorded");
        Ok(())
    }

    /// Record `option` for the question on screen.
    pub fn select_current(&mut self, option: &str) -> Result<(), QuestionnaireError> {
        self.select_option(self.position, option)
    }

    /// Record the option at `option_index` of the question on screen.
    pub fn select_current_index(&mut self, option_index: usize) -> Result<(), QuestionnaireError> {
        self.ensure_open()?;

        let question = &self.questionnaire.questions()[self.position];
        match question.option(option_index) {
            Some(option) => {
                let option = option.to_string();
                self.select_option(self.position, &option)
            }
            None => Err(QuestionnaireError::InvalidOption {
                index: self.position,
                option: format!("#{}", option_index + 1),
            }),
        }
    }

    /// Step back one question. Does nothing on the first question.
    pub fn go_to_previous(&mut self) {
        if self.submitted {
            return;
        }
        if self.position > 0 {
            self.position -= 1;
            tracing::debug!(position = self.position, "moved to previous question");
        }
    }

    /// Step forward one question.
    ///
    /// On the last question this does not move; it returns [`Advance::Submit`]
    /// and the caller is expected to call [`submit`](Self::submit).
    pub fn go_to_next(&mut self) -> Result<Advance, QuestionnaireError> {
        self.ensure_open()?;

        if self.current_answer().is_unanswered() {
            tracing::debug!(position = self.position, "forward navigation without an answer");
            return Err(QuestionnaireError::IncompleteAnswer {
                index: self.position,
            });
        }

        if self.is_last() {
            tracing::debug!(position = self.position, "submission requested");
            return Ok(Advance::Submit);
        }

        self.position += 1;
        tracing::debug!(position = self.position, "moved to next question");
        Ok(Advance::Moved(self.position))
    }

    /// Hand the completed answers to `handler` and end the session.
    ///
    /// Only allowed from the last question with an answer recorded. If the
    /// handler fails, the controller stays on the last question and the
    /// submission can be retried.
    pub fn submit<H>(&mut self, mut handler: H) -> Result<CompletedAnswers, SubmitError>
    where
        H: SubmissionHandler,
    {
        self.ensure_open()?;

        if !self.is_last() {
            return Err(QuestionnaireError::NotAtLastQuestion {
                index: self.position,
            }
            .into());
        }

        let completed = CompletedAnswers::from_answers(&self.questionnaire, &self.answers)
            .map_err(|index| QuestionnaireError::IncompleteAnswer { index })?;

        if let Err(err) = handler.submit(&completed) {
            let err = SubmitError::handler(err);
            tracing::warn!(error = %err, "submission handler failed");
            return Err(err);
        }

        self.submitted = true;
        tracing::info!(answers = completed.len(), "questionnaire submitted");
        Ok(completed)
    }

    fn ensure_open(&self) -> Result<(), QuestionnaireError> {
        if self.submitted {
            Err(QuestionnaireError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingSubmitter;
    use questionnaire_types::Question;

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
    fn starts_at_first_question_unanswered() {
        let controller = QuestionnaireController::new(fitness());
        let view = controller.current_question();

        assert_eq!(view.position, 0);
        assert_eq!(view.total, 3);
        assert_eq!(view.question.text(), "What is your current fitness level?");
        assert!(view.answer.is_unanswered());
        assert!(!controller.can_go_forward());
        assert_eq!(controller.answers().len(), 3);
    }

    #[test]
    fn selection_is_visible_through_current_question() {
        let mut controller = QuestionnaireController::new(fitness());

        for (index, option) in ["Advanced", "Cycling", "Maintain my fitness"]
            .into_iter()
            .enumerate()
        {
            controller.select_option(index, option).unwrap();
            assert_eq!(controller.current_question().answer.as_str(), Some(option));
            if index < 2 {
                controller.go_to_next().unwrap();
            }
        }
    }

    #[test]
    fn reselecting_overwrites() {
        let mut controller = QuestionnaireController::new(fitness());
        controller.select_current("Beginner").unwrap();
        controller.select_current("Intermediate").unwrap();

        assert_eq!(
            controller.current_question().answer,
            &Answer::from("Intermediate")
        );
    }

    #[test]
    fn option_outside_set_is_rejected_and_answer_kept() {
        let mut controller = QuestionnaireController::new(fitness());
        controller.select_option(0, "Advanced").unwrap();

        assert_eq!(
            controller.select_option(0, "Running"),
            Err(QuestionnaireError::InvalidOption {
                index: 0,
                option: "Running".to_string()
            })
        );
        assert_eq!(controller.answers().get(0), Some(&Answer::from("Advanced")));
    }

    #[test]
    fn selection_out_of_range_is_rejected() {
        let mut controller = QuestionnaireController::new(fitness());

        assert_eq!(
            controller.select_option(3, "Beginner"),
            Err(QuestionnaireError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(matches!(
            controller.select_current_index(7),
            Err(QuestionnaireError::InvalidOption { index: 0, .. })
        ));
    }

    #[test]
    fn previous_on_first_question_is_a_no_op() {
        let mut controller = QuestionnaireController::new(fitness());
        controller.go_to_previous();

        assert_eq!(controller.position(), 0);
    }

    #[test]
    fn next_is_rejected_without_answer_at_every_position() {
        let mut controller = QuestionnaireController::new(fitness());
        let picks = ["Beginner", "Running", "Complete a race"];

        for (index, pick) in picks.into_iter().enumerate() {
            assert_eq!(
                controller.go_to_next(),
                Err(QuestionnaireError::IncompleteAnswer { index })
            );
            assert_eq!(controller.position(), index);
            controller.select_current(pick).unwrap();
            if index < 2 {
                assert_eq!(controller.go_to_next(), Ok(Advance::Moved(index + 1)));
            }
        }
    }

    #[test]
    fn next_on_last_question_signals_submit_without_moving() {
        let mut controller = QuestionnaireController::new(fitness());
        controller.select_current_index(0).unwrap();
        controller.go_to_next().unwrap();
        controller.select_current_index(0).unwrap();
        controller.go_to_next().unwrap();
        controller.select_current_index(0).unwrap();

        assert_eq!(controller.forward_label(), "Submit");
        assert_eq!(controller.go_to_next(), Ok(Advance::Submit));
        assert_eq!(controller.go_to_next(), Ok(Advance::Submit));
        assert_eq!(controller.position(), 2);
    }

    #[test]
    fn navigation_preserves_answers() {
        let mut controller = QuestionnaireController::new(fitness());
        controller.select_current("Intermediate").unwrap();
        controller.go_to_next().unwrap();
        controller.select_current("Swimming").unwrap();
        controller.go_to_next().unwrap();
        controller.go_to_previous();
        controller.go_to_previous();

        assert_eq!(controller.current_question().selected_index(), Some(1));
        controller.go_to_next().unwrap();
        assert_eq!(controller.current_question().answer.as_str(), Some("Swimming"));
        assert!(controller.answers().get(2).unwrap().is_unanswered());
    }

    #[test]
    fn submit_requires_last_question() {
        let mut controller = QuestionnaireController::new(fitness());
        controller.select_current("Beginner").unwrap();

        let result = controller.submit(RecordingSubmitter::new());
        assert!(matches!(
            result,
            Err(SubmitError::Rejected(QuestionnaireError::NotAtLastQuestion {
                index: 0
            }))
        ));
        assert!(!controller.is_submitted());
    }

    #[test]
    fn submit_reports_skipped_question() {
        let mut controller = QuestionnaireController::new(fitness());
        controller.select_current("Beginner").unwrap();
        controller.go_to_next().unwrap();
        controller.select_current("Running").unwrap();
        controller.go_to_next().unwrap();

        let result = controller.submit(RecordingSubmitter::new());
        assert!(matches!(
            result,
            Err(SubmitError::Rejected(QuestionnaireError::IncompleteAnswer {
                index: 2
            }))
        ));
    }

    #[test]
    fn submitted_controller_is_terminal() {
        let mut controller = QuestionnaireController::new(fitness());
        for _ in 0..2 {
            controller.select_current_index(1).unwrap();
            controller.go_to_next().unwrap();
        }
        controller.select_current_index(1).unwrap();

        let mut submitter = RecordingSubmitter::new();
        let completed = controller.submit(&mut submitter).unwrap();
        assert_eq!(
            completed.options(),
            vec!["Intermediate", "Cycling", "Improve my performance"]
        );
        assert_eq!(submitter.submissions().len(), 1);

        assert!(controller.is_submitted());
        assert!(!controller.can_go_forward());
        assert_eq!(
            controller.select_current("Advanced"),
            Err(QuestionnaireError::AlreadySubmitted)
        );
        assert_eq!(
            controller.go_to_next(),
            Err(QuestionnaireError::AlreadySubmitted)
        );
        assert_eq!(
            controller.select_current_index(7),
            Err(QuestionnaireError::AlreadySubmitted)
        );
        controller.go_to_previous();
        assert_eq!(controller.position(), 2);
    }

    #[test]
    fn failed_handler_leaves_questionnaire_open() {
        let mut controller = QuestionnaireController::new(
            Questionnaire::new(vec![Question::new("Ready?", ["yes", "no"])]).unwrap(),
        );
        controller.select_current("yes").unwrap();

        let mut failing = RecordingSubmitter::failing_times(1);
        assert!(matches!(
            controller.submit(&mut failing),
            Err(SubmitError::Handler(_))
        ));
        assert!(!controller.is_submitted());

        controller.submit(&mut failing).unwrap();
        assert!(controller.is_submitted());
        assert_eq!(failing.submissions().len(), 1);
    }
}
