/// The recorded answer for a single question.
///
/// `Unanswered` is the explicit empty marker; a question never holds an empty
/// or placeholder option string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Answer {
    /// No option selected yet.
    #[default]
    Unanswered,

    /// The selected option text.
    Selected(String),
}

impl Answer {
    /// Check if this is the empty marker.
    pub fn is_unanswered(&self) -> bool {
        matches!(self, Self::Unanswered)
    }

    /// Check if an option has been selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// Try to get the selected option.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Unanswered => None,
            Self::Selected(s) => Some(s),
        }
    }

    /// Check whether this answer is exactly `option`.
    pub fn is(&self, option: &str) -> bool {
        self.as_str() == Some(option)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Selected(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Selected(s.to_string())
    }
}

impl From<Option<String>> for Answer {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unanswered, Self::Selected)
    }
}
