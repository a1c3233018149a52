use serde::{Deserialize, Serialize};

use crate::DefinitionError;

/// A single-select question: a prompt plus a fixed, ordered set of options.
///
/// Questions are validated when they become part of a [`Questionnaire`](crate::Questionnaire):
/// the text must not be blank, there must be at least one option, and options
/// must be unique within the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt text shown to the user.
    text: String,

    /// The selectable options, in display order.
    options: Vec<String>,
}

impl Question {
    /// Create a new question.
    pub fn new<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Get the option at the given index.
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Check whether `option` is one of this question's options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Position of `option` in the option list.
    pub fn option_index(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }

    /// Check the question's own invariants. `index` is only used for error reporting.
    pub(crate) fn validate(&self, index: usize) -> Result<(), DefinitionError> {
        if self.text.trim().is_empty() {
            return Err(DefinitionError::EmptyText { index });
        }
        if self.options.is_empty() {
            return Err(DefinitionError::NoOptions { index });
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(DefinitionError::DuplicateOption {
                    index,
                    option: option.clone(),
                });
            }
        }
        Ok(())
    }
}
