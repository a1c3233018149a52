/// Rejected controller operation.
///
/// All variants are recoverable: the presentation layer reports them and
/// re-prompts the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    /// The option is not part of the question's option set.
    #[error("'{option}' is not an option of question {}", .index + 1)]
    InvalidOption { index: usize, option: String },

    /// Forward navigation attempted while the current question is unanswered.
    #[error("Question {} must be answered before moving on", .index + 1)]
    IncompleteAnswer { index: usize },

    /// The question index does not exist.
    #[error("Question index {index} is out of range (questionnaire has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Submission attempted before reaching the final question.
    #[error("Cannot submit from question {}; submission happens after the last question", .index + 1)]
    NotAtLastQuestion { index: usize },

    /// The questionnaire was already submitted; the session is over.
    #[error("Questionnaire has already been submitted")]
    AlreadySubmitted,
}

/// Malformed questionnaire definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("Questionnaire has no questions")]
    NoQuestions,

    #[error("Question {} has no text", .index + 1)]
    EmptyText { index: usize },

    #[error("Question {} has no options", .index + 1)]
    NoOptions { index: usize },

    #[error("Question {} lists option '{option}' more than once", .index + 1)]
    DuplicateOption { index: usize, option: String },
}

/// Error returned when submitting a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The controller refused the submission (unanswered question, wrong position, ...).
    #[error(transparent)]
    Rejected(#[from] QuestionnaireError),

    /// The submission handler failed. The questionnaire stays open for a retry.
    #[error("Submission failed: {0}")]
    Handler(anyhow::Error),
}

impl SubmitError {
    /// Create a handler error from any error type.
    pub fn handler(err: impl Into<anyhow::Error>) -> Self {
        Self::Handler(err.into())
    }
}

/// Error type for running a whole session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// User quit before submitting.
    #[error("Questionnaire abandoned by user")]
    Abandoned,

    /// Presentation layer failure (I/O, terminal, ...).
    #[error("Presenter error: {0}")]
    Presenter(anyhow::Error),

    /// Submission failed and the presenter gave up.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl SessionError {
    /// Create a presenter error from any error type.
    pub fn presenter(err: impl Into<anyhow::Error>) -> Self {
        Self::Presenter(err.into())
    }

    /// Check if this error represents the user walking away.
    pub fn is_abandoned(&self) -> bool {
        matches!(self, Self::Abandoned)
    }
}
