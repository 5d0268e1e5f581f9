//! Error types for infra-tools.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for the CLI tools.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum InfraError {
    /// Config file missing, unreadable or not valid YAML.
    #[error("{0}")]
    Config(String),

    /// Template could not be loaded, rendered or written.
    #[error("{0}")]
    Template(String),

    /// Compute Engine API call failed.
    #[error("compute API request failed: {0}")]
    Compute(String),

    /// GitHub API call failed.
    #[error("GitHub API request failed: {0}")]
    Github(String),
}

impl InfraError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            InfraError::Config(_) => exit_codes::CONFIG_ERROR,
            InfraError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            InfraError::Compute(_) => exit_codes::REMOTE_FAILURE,
            InfraError::Github(_) => exit_codes::REMOTE_FAILURE,
        }
    }
}

/// Result type alias for infra-tools operations.
pub type Result<T> = std::result::Result<T, InfraError>;
