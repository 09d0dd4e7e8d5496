//! Error types for the wtm CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for wtm operations.
#[derive(Error, Debug)]
pub enum WtmError {
    /// User provided invalid arguments or the repository is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Configuration file could not be read, parsed, or validated.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The operator dismissed an interactive prompt.
    #[error("cancelled by user")]
    Cancelled,

    /// Writing to an output stream or spawning a process failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WtmError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WtmError::UserError(_) | WtmError::ConfigError(_) | WtmError::Io(_) => {
                exit_codes::USER_ERROR
            }
            WtmError::GitError(_) => exit_codes::GIT_FAILURE,
            WtmError::Cancelled => exit_codes::SUCCESS,
        }
    }
}

/// Result type alias for wtm operations.
pub type Result<T> = std::result::Result<T, WtmError>;
