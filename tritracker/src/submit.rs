use std::{
    fs,
    path::{Path, PathBuf},
};

use questionnaire::{CompletedAnswers, SubmissionHandler};

/// Error type for [`JsonSubmitter`].
#[derive(Debug, thiserror::Error)]
pub(crate) enum OutputError {
    #[error("Failed to encode answers: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write answers to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Submission handler that renders the answers as JSON.
///
/// With a path, the file is (re)written on every submission. Without one the
/// rendered document is kept for the caller to print once the terminal is
/// back in its normal state.
#[derive(Debug, Default)]
pub(crate) struct JsonSubmitter {
    path: Option<PathBuf>,
    rendered: Option<String>,
}

impl JsonSubmitter {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            rendered: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The JSON of the last successful submission.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }
}

impl SubmissionHandler for JsonSubmitter {
    type Error = OutputError;

    fn submit(&mut self, answers: &CompletedAnswers) -> Result<(), Self::Error> {
        let json = serde_json::to_string_pretty(answers)?;

        if let Some(path) = &self.path {
            fs::write(path, format!("{json}\n")).map_err(|source| OutputError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "answers written");
        }

        self.rendered = Some(json);
        Ok(())
    }
}
