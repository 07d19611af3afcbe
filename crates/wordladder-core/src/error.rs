//! Error types and exit codes for wordladder
//!
//! The ladder search itself never fails: missing words and disconnected
//! graphs are reported through [`crate::search::LadderStatus`]. The errors
//! here cover the collaborators around it (word list loading, config, CLI).
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing word list, unreadable config)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing word list, invalid config (3)
    Data = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors that can occur outside the core search
#[derive(Error, Debug)]
pub enum LadderError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("word list not found: {path:?}")]
    WordListNotFound { path: PathBuf },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl LadderError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        LadderError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a config file that failed to parse
    pub fn invalid_config(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        LadderError::InvalidConfig {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LadderError::UsageError(_) => ExitCode::Usage,

            LadderError::WordListNotFound { .. } | LadderError::InvalidConfig { .. } => {
                ExitCode::Data
            }

            LadderError::Io(_)
            | LadderError::Json(_)
            | LadderError::FailedOperationWithTarget { .. }
            | LadderError::Other(_) => ExitCode::Failure,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            LadderError::UsageError(_) => "usage_error",
            LadderError::WordListNotFound { .. } => "word_list_not_found",
            LadderError::InvalidConfig { .. } => "invalid_config",
            LadderError::Io(_) => "io_error",
            LadderError::Json(_) => "json_error",
            LadderError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            LadderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wordladder operations
pub type Result<T> = std::result::Result<T, LadderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            LadderError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            LadderError::WordListNotFound {
                path: PathBuf::from("missing.txt")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            LadderError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(ExitCode::Data as u8, 3);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = LadderError::WordListNotFound {
            path: PathBuf::from("words.txt"),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "word_list_not_found");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("words.txt"));
    }
}
