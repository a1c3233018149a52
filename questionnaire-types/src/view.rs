use crate::{Answer, Question};

/// Read-only snapshot of the question currently on screen.
///
/// This is everything a presentation layer needs to render one step: the
/// question, its recorded answer, and where it sits in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// Zero-based position of the question.
    pub position: usize,

    /// Total number of questions.
    pub total: usize,

    pub question: &'a Question,

    /// The recorded answer, or the empty marker.
    pub answer: &'a Answer,
}

impl QuestionView<'_> {
    /// Whether the forward control (Next / Submit) should be enabled.
    pub fn can_go_forward(&self) -> bool {
        self.answer.is_selected()
    }

    /// Whether the backward control should be enabled.
    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.total
    }

    /// Label for the forward control.
    pub fn forward_label(&self) -> &'static str {
        if self.is_last() { "Submit" } else { "Next" }
    }

    /// Index of the selected option within the question's options.
    pub fn selected_index(&self) -> Option<usize> {
        self.answer
            .as_str()
            .and_then(|option| self.question.option_index(option))
    }

    /// One-based progress, e.g. `(2, 3)` on the second of three questions.
    pub fn progress(&self) -> (usize, usize) {
        (self.position + 1, self.total)
    }
}

/// Result of a successful forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this position.
    Moved(usize),

    /// The final question is answered; the caller should submit.
    Submit,
}

/// A discrete user action, as reported by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Select the option at this index of the current question.
    Select(usize),

    /// Go back one question.
    Previous,

    /// Go forward one question, or submit on the last one.
    Next,

    /// Abandon the questionnaire.
    Quit,
}
