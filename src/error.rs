//! Error types for the offshoot CLI.
//!
//! Uses thiserror for derive macros. The error surface is intentionally
//! coarse: external tools are treated as an oracle that either succeeds or
//! fails, and all failures map to the same exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for offshoot operations.
#[derive(Error, Debug)]
pub enum OffshootError {
    /// User provided invalid input (bad branch name, empty prompt value).
    #[error("{0}")]
    UserError(String),

    /// An external command exited non-zero. The message carries whatever
    /// output the command produced.
    #[error("External command failed: {0}")]
    CommandError(String),
}

impl OffshootError {
    /// Returns the exit code for this error. Every failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            OffshootError::UserError(_) => exit_codes::FAILURE,
            OffshootError::CommandError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for offshoot operations.
pub type Result<T> = std::result::Result<T, OffshootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_exits_with_failure() {
        let err = OffshootError::UserError("bad branch name".to_string());
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn command_error_exits_with_failure() {
        let err = OffshootError::CommandError("git checkout failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = OffshootError::UserError("branch 'hotfix/x' is not a feature branch".to_string());
        assert_eq!(err.to_string(), "branch 'hotfix/x' is not a feature branch");

        let err = OffshootError::CommandError("git checkout master: exit code 1".to_string());
        assert!(err.to_string().starts_with("External command failed:"));
    }
}
