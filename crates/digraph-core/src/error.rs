//! Error types and exit codes for digraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid arguments)
//! - 3: Data error (missing node, malformed route)

mod macros;

use thiserror::Error;

/// Exit codes reported by the digraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing node, malformed route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// A caller-supplied argument is missing or malformed
    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    /// A node referenced by a traversal is not part of the graph
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    /// A value has the wrong shape for the structure being built
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("{0}")]
    UsageError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid or missing argument
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a value of the wrong shape
    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        GraphError::TypeMismatch(reason.into())
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidArgument { .. } | GraphError::UsageError(_) => ExitCode::Usage,
            GraphError::NotFound { .. } | GraphError::TypeMismatch(_) => ExitCode::Data,
            GraphError::Json(_) | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidArgument { .. } => "invalid_argument",
            GraphError::NotFound { .. } => "not_found",
            GraphError::TypeMismatch(_) => "type_mismatch",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert the error to a JSON envelope for structured output
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

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
