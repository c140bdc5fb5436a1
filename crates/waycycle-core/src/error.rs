//! Error types and exit codes for waycycle
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing node, duplicate node)

use thiserror::Error;

/// Exit codes for the waycycle CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for WaycycleError {
    fn from(err: rusqlite::Error) -> Self {
        WaycycleError::Other(err.to_string())
    }
}

/// Errors that can occur during waycycle operations
#[derive(Error, Debug)]
pub enum WaycycleError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown engine: {0} (expected: traversal, query, or both)")]
    UnknownEngine(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("node already exists: {name}")]
    NodeExists { name: String },

    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("engines disagree for subset [{subset}]: traversal={traversal}, query={query}")]
    EngineMismatch {
        subset: String,
        traversal: bool,
        query: bool,
    },

    #[error("{0}")]
    Other(String),
}

impl WaycycleError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        WaycycleError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaycycleError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaycycleError::UnknownFormat(_)
            | WaycycleError::UnknownEngine(_)
            | WaycycleError::UsageError(_)
            | WaycycleError::InvalidValue { .. } => ExitCode::Usage,

            WaycycleError::NodeExists { .. } | WaycycleError::NodeNotFound { .. } => {
                ExitCode::Data
            }

            WaycycleError::Io(_)
            | WaycycleError::Json(_)
            | WaycycleError::FailedOperation { .. }
            | WaycycleError::EngineMismatch { .. }
            | WaycycleError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaycycleError::UnknownFormat(_) => "unknown_format",
            WaycycleError::UnknownEngine(_) => "unknown_engine",
            WaycycleError::UsageError(_) => "usage_error",
            WaycycleError::InvalidValue { .. } => "invalid_value",
            WaycycleError::NodeExists { .. } => "node_exists",
            WaycycleError::NodeNotFound { .. } => "node_not_found",
            WaycycleError::Io(_) => "io_error",
            WaycycleError::Json(_) => "json_error",
            WaycycleError::FailedOperation { .. } => "failed_operation",
            WaycycleError::EngineMismatch { .. } => "engine_mismatch",
            WaycycleError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for waycycle operations
pub type Result<T> = std::result::Result<T, WaycycleError>;
