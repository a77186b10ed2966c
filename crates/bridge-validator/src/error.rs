//! Error types for the smoke test

/// Errors while probing the server
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// Request failed before a response arrived
    #[error("{url} not accessible: {source}")]
    Unreachable {
        /// Requested URL
        url: String,
        /// Underlying error
        #[source]
        source: reqwest::Error,
    },

    /// Response arrived with a non-200 status
    #[error("{url} returned status code {status}")]
    UnexpectedStatus {
        /// Requested URL
        url: String,
        /// Status received
        status: u16,
    },

    /// Body was not valid JSON
    #[error("{url} returned invalid JSON: {source}")]
    InvalidJson {
        /// Requested URL
        url: String,
        /// Underlying error
        #[source]
        source: reqwest::Error,
    },

    /// Base URL could not be parsed
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// Offending URL
        url: String,
        /// Parser message
        message: String,
    },

    /// HTTP client could not be built
    #[error("http client error: {0}")]
    Client(#[source] reqwest::Error),

    /// Report output failed
    #[error("io error writing report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for validator operations
pub type ValidatorResult<T> = Result<T, ValidatorError>;
