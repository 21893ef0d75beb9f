//! Error types and exit codes for routefind
//!
//! Exit codes:
//! - 0: Success (including "no path found")
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed problem input)

mod macros;

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
    /// Data error - malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during routefind operations
///
/// An unreachable goal is not an error: searches report it through
/// `PathResult::found`.
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, or ucs)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create a malformed-input error anchored at a 1-based input line
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        RouteError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UnknownAlgorithm(_)
            | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::MalformedInput { .. } => ExitCode::Data,

            RouteError::Io(_) | RouteError::Json(_) | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UnknownAlgorithm(_) => "unknown_algorithm",
            RouteError::UsageError(_) => "usage_error",
            RouteError::MalformedInput { .. } => "malformed_input",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let RouteError::MalformedInput { line, .. } = self {
            error_obj["line"] = serde_json::json!(line);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for routefind operations
pub type Result<T> = std::result::Result<T, RouteError>;
