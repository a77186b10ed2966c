//! Error types for the preview server

use std::path::PathBuf;

/// Errors while starting the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Address could not be bound
    #[error("failed to bind server: {0}")]
    Bind(#[from] warp::Error),

    /// Served root is missing or not a directory
    #[error("serving root not found: {0}")]
    RootNotFound(PathBuf),

    /// IO error while resolving the served root
    #[error("io error resolving {path}: {source}")]
    Io {
        /// Path being resolved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ServerError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;
