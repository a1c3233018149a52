use serde::Deserialize;

use crate::{DefinitionError, Question};

/// The top-level structure containing all questions and metadata for a questionnaire.
///
/// A questionnaire is presentation-agnostic. It is validated on construction and
/// immutable afterwards, so every session built from it can rely on a non-empty
/// question list with well-formed option sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawQuestionnaire")]
pub struct Questionnaire {
    title: Option<String>,
    prelude: Option<String>,
    questions: Vec<Question>,
    epilogue: Option<String>,
}

/// Unvalidated shape used for deserialization.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawQuestionnaire {
    title: Option<String>,
    prelude: Option<String>,
    #[serde(default)]
    questions: Vec<Question>,
    epilogue: Option<String>,
}

impl TryFrom<RawQuestionnaire> for Questionnaire {
    type Error = DefinitionError;

    fn try_from(raw: RawQuestionnaire) -> Result<Self, Self::Error> {
        let mut questionnaire = Self::new(raw.questions)?;
        questionnaire.title = raw.title;
        questionnaire.prelude = raw.prelude;
        questionnaire.epilogue = raw.epilogue;
        Ok(questionnaire)
    }
}

impl Questionnaire {
    /// Create a questionnaire from the given questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, DefinitionError> {
        if questions.is_empty() {
            return Err(DefinitionError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(Self {
            title: None,
            prelude: None,
            questions,
            epilogue: None,
        })
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the prelude message, shown before the first question.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message, shown after submission.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn prelude(&self) -> Option<&str> {
        self.prelude.as_deref()
    }

    pub fn epilogue(&self) -> Option<&str> {
        self.epilogue.as_deref()
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at `index`.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Get the number of questions. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the final question.
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}
