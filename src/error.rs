//! Error types for the navbar crate.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for navbar operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum NavbarError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// The navbar configuration could not be parsed or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The output sink rejected a write while rendering.
    #[error("Render failed: {0}")]
    RenderError(String),

    /// Reading or writing a file failed.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl NavbarError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NavbarError::UserError(_) => exit_codes::USER_ERROR,
            NavbarError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            NavbarError::RenderError(_) => exit_codes::RENDER_FAILURE,
            NavbarError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

impl From<std::fmt::Error> for NavbarError {
    fn from(_: std::fmt::Error) -> Self {
        NavbarError::RenderError("output sink rejected a write".to_string())
    }
}

/// Result type alias for navbar operations.
pub type Result<T> = std::result::Result<T, NavbarError>;
