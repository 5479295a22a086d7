//! CLI error types for file I/O, CSV parsing, configuration and transform errors.
//!
//! This module provides the [`CliError`] enum which wraps every error that can
//! occur while replaying a series. Messages are meant to be actionable: they
//! say what went wrong and, where possible, how to fix it.

use std::io;

use thiserror::Error;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug, Error)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    #[error("I/O error{}: {source}{}", with_path(.path), read_hint(.path))]
    Io {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },

    /// The input CSV is malformed or a value is not numeric.
    #[error(
        "CSV parse error{}: {message}. Ensure the CSV has a header row and numeric values in the selected column",
        on_line(.line)
    )]
    Csv {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },

    /// A transform configuration file could not be decoded.
    #[error(
        "invalid configuration in '{path}': {source}. Expected a JSON list such as \
         [{{\"kind\": \"rolling_mean\", \"window_size\": 7}}]"
    )]
    Config {
        /// The underlying JSON error.
        source: serde_json::Error,
        /// Path of the configuration file.
        path: String,
    },

    /// A statistic rejected its parameters or its update.
    #[error("transform error: {source}")]
    Transform {
        /// The underlying fast-window error.
        #[from]
        source: fast_window::Error,
    },

    /// An invalid argument was provided.
    #[error("invalid argument '{argument}': {reason}{}", suggest(.suggestion))]
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

fn with_path(path: &Option<String>) -> String {
    path.as_ref().map_or_else(String::new, |p| format!(" with file '{p}'"))
}

fn read_hint(path: &Option<String>) -> &'static str {
    if path.is_some() {
        ". Check that the file exists and you have the required permissions"
    } else {
        ""
    }
}

fn on_line(line: &Option<usize>) -> String {
    line.map_or_else(String::new, |l| format!(" on line {l}"))
}

fn suggest(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map_or_else(String::new, |s| format!(". {s}"))
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io {
            source: err,
            path: None,
        }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let line = err.position().map(|p| p.line() as usize);
        CliError::Csv {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
