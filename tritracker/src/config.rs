use std::{fs, path::Path};

use anyhow::Context;
use questionnaire::Questionnaire;

/// Load a questionnaire definition from a TOML file.
///
/// The definition is validated while parsing, so a file with no questions,
/// an option-less question or repeated options is rejected here.
pub(crate) fn load(path: &Path) -> anyhow::Result<Questionnaire> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read questionnaire from {}", path.display()))?;

    let questionnaire: Questionnaire = toml::from_str(&contents)
        .with_context(|| format!("Invalid questionnaire definition in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        questions = questionnaire.len(),
        "loaded questionnaire"
    );

    Ok(questionnaire)
}
