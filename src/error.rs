//! Error types for the typeahead engine.
//!
//! The completion flow itself never fails — malformed input degrades to empty
//! suggestions — so these types exist for the field-resolver boundary and the
//! adapters behind it.

use std::{fmt, io};

/// Crate-wide `Result` type using [`LogsightError`] as the error.
pub type Result<T> = std::result::Result<T, LogsightError>;

/// Top-level error type for logsight operations.
#[derive(Debug)]
pub enum LogsightError {
    /// Field resolution against the external field source failed.
    FieldResolve(String),

    /// I/O errors from resolver adapters.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

impl fmt::Display for LogsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogsightError::FieldResolve(msg) => write!(f, "Field resolution failed: {msg}"),
            LogsightError::Io(e) => write!(f, "I/O error: {e}"),
            LogsightError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for LogsightError {}

impl From<io::Error> for LogsightError {
    fn from(err: io::Error) -> Self {
        LogsightError::Io(err)
    }
}

impl From<String> for LogsightError {
    fn from(msg: String) -> Self {
        LogsightError::Generic(msg)
    }
}

impl From<&str> for LogsightError {
    fn from(msg: &str) -> Self {
        LogsightError::Generic(msg.to_owned())
    }
}
