//! Error types for the hook

/// Errors that stop the hook from reaching a verdict
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// Stdin was not the expected JSON payload
    #[error("invalid hook input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// Reading input or writing the report failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hook operations
pub type HookResult<T> = Result<T, HookError>;
