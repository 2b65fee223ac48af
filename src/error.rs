//! Error types for the chainup CLI.
//!
//! Uses thiserror for derive macros. Every fatal condition is a variant here
//! and travels up to `main`, which is the only place that ends the process.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for chainup operations.
#[derive(Error, Debug)]
pub enum ChainError {
    /// Malformed chain argument or unrecognized run option.
    #[error("{0}")]
    Usage(String),

    /// Config file could not be read, parsed, or validated.
    #[error("config error: {0}")]
    Config(String),

    /// A chain token matched no known branch.
    #[error("No branch name matches: {token}")]
    NoMatch { token: String },

    /// A chain token matched several distinct branches and ambiguity is rejected.
    #[error("branch name '{token}' is ambiguous, it matches: {}", .candidates.join(", "))]
    Ambiguous {
        token: String,
        candidates: Vec<String>,
    },

    /// The resolved chain failed validation.
    #[error("invalid branch chain: {0}")]
    Validation(String),

    /// A git command failed. `output` is the command's combined output, verbatim.
    #[error("{title}\nCommand: {command}\n{output}")]
    Git {
        title: String,
        command: String,
        output: String,
    },
}

impl ChainError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChainError::Usage(_) | ChainError::Config(_) => exit_codes::USER_ERROR,
            ChainError::NoMatch { .. }
            | ChainError::Ambiguous { .. }
            | ChainError::Validation(_) => exit_codes::RESOLUTION_FAILURE,
            ChainError::Git { .. } => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for chainup operations.
pub type Result<T> = std::result::Result<T, ChainError>;
