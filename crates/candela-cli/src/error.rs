//! CLI error types for file I/O, CSV parsing, and computation failures.
//!
//! This module provides the [`CliError`] enum which wraps all possible errors
//! that can occur during CLI operations. Error messages are designed to be
//! actionable, providing both what went wrong and how to fix it. Each error
//! class maps to a distinct process exit code via [`CliError::exit_code`].

use std::fmt;
use std::io;

/// CLI error type encompassing all possible error conditions.
///
/// Each variant provides context about what went wrong and, where applicable,
/// suggestions for how to fix the issue.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// An error occurred while parsing CSV data.
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },
    /// An error occurred while computing an indicator or fitting a model.
    IndicatorError {
        /// The underlying candela error.
        source: candela::Error,
    },
    /// An error occurred while rendering a chart.
    ChartError {
        /// The underlying candela-chart error.
        source: candela_chart::ChartError,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl CliError {
    /// Process exit code for this error class.
    ///
    /// 1 for usage errors, 2 for data errors (I/O, CSV), 3 for computation
    /// and rendering errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument { .. } => 1,
            CliError::IoError { .. } | CliError::CsvParseError { .. } => 2,
            CliError::IndicatorError { .. } | CliError::ChartError { .. } => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError { source, path } => {
                if let Some(p) = path {
                    write!(f, "I/O error with file '{p}': {source}. ")?;
                    write!(
                        f,
                        "Check that the file exists and you have read permissions."
                    )
                } else {
                    write!(f, "I/O error: {source}")
                }
            }
            CliError::CsvParseError { message, line } => {
                if let Some(l) = line {
                    write!(f, "CSV parse error on line {l}: {message}. ")?;
                } else {
                    write!(f, "CSV parse error: {message}. ")?;
                }
                write!(
                    f,
                    "Ensure your CSV has a header row and numeric data columns."
                )
            }
            CliError::IndicatorError { source } => {
                write!(f, "Computation error: {source}")
            }
            CliError::ChartError { source } => {
                write!(f, "Chart rendering error: {source}")
            }
            CliError::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "Invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::IoError { source, .. } => Some(source),
            CliError::IndicatorError { source } => Some(source),
            CliError::ChartError { source } => Some(source),
            CliError::CsvParseError { .. } | CliError::InvalidArgument { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<candela::Error> for CliError {
    fn from(err: candela::Error) -> Self {
        CliError::IndicatorError { source: err }
    }
}

impl From<candela_chart::ChartError> for CliError {
    fn from(err: candela_chart::ChartError) -> Self {
        CliError::ChartError { source: err }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line() as usize);
        CliError::CsvParseError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
