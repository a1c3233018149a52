use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

mod log;

pub(crate) use log::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "tritracker", version)]
/// Plan your triathlon season by answering a short questionnaire
pub(crate) struct Args {
    /// Path to a TOML questionnaire definition. Defaults to the built-in fitness questionnaire.
    #[arg(long, short, env = "TRITRACKER_QUESTIONS")]
    pub questions: Option<PathBuf>,
    /// How the questionnaire is presented
    #[arg(long, short, value_enum, default_value_t = Frontend::Tui)]
    pub frontend: Frontend,
    /// File the submitted answers are written to as JSON. Defaults to stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Set the logging level
    #[arg(long = "log", env = "TRITRACKER_LOG", default_value_t)]
    pub log_level: LogLevel,
    /// Append logs to this file instead of stderr
    #[arg(long, env = "TRITRACKER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn questions_path(&self) -> Option<&Path> {
        self.questions.as_deref()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum Frontend {
    /// Full-screen terminal UI
    Tui,
    /// Line-by-line select prompts
    Prompt,
}

impl Frontend {
    /// Whether the frontend owns the whole terminal while it runs.
    pub fn takes_over_terminal(self) -> bool {
        matches!(self, Frontend::Tui)
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tritracker"]).unwrap();

        assert_eq!(args.frontend, Frontend::Tui);
        assert_eq!(args.log_level, LogLevel::Warn);
        assert!(args.output.is_none());
        assert!(args.log_file().is_none());
    }

    #[test]
    fn prompt_frontend_with_output() {
        let args = Args::try_parse_from([
            "tritracker",
            "--frontend",
            "prompt",
            "--output",
            "answers.json",
            "--questions",
            "season.toml",
            "--log",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.frontend, Frontend::Prompt);
        assert!(!args.frontend.takes_over_terminal());
        assert_eq!(args.output.as_deref(), Some(Path::new("answers.json")));
        assert_eq!(args.questions_path(), Some(Path::new("season.toml")));
        assert_eq!(args.log_level, LogLevel::Debug);
    }

    #[test]
    fn unknown_frontend_is_rejected() {
        assert!(Args::try_parse_from(["tritracker", "--frontend", "web"]).is_err());
    }
}
