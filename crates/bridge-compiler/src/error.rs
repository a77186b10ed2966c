//! Error types for the notes compiler

use std::path::PathBuf;

/// Errors while writing compiled artifacts
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// IO error while writing an artifact
    #[error("io error writing {path}: {source}")]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CompileError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for compiler operations
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = CompileError::io_error(
            "out/structured_bridge_data.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "io error writing out/structured_bridge_data.json: denied"
        );
    }
}
