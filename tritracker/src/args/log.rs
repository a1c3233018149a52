use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors
    Error,
    /// Warnings and errors, such as failed submissions
    #[default]
    Warn,
    /// Info, warning and error messages
    Info,
    /// Every navigation step, from TriTracker crates only
    Debug,
    /// Everything, including dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "questionnaire=error,tritracker=error,off",
            LogLevel::Warn => "questionnaire=warn,tritracker=warn,off",
            LogLevel::Info => "questionnaire=info,tritracker=info,off",
            LogLevel::Debug => "questionnaire=debug,tritracker=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
