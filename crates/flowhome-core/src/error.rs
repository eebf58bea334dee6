use thiserror::Error;

/// Core error type for flowhome client operations.
///
/// Every backend error response is normalized into one of these variants,
/// each carrying a human-readable message suitable for an inline banner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request was cancelled by its owning fetch sequence. Never shown
    /// to the user; callers discard it silently.
    #[error("request cancelled")]
    Cancelled,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Classify an HTTP status code with the message extracted from the
    /// response body (or the status text when no body was parseable).
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => ApiError::Validation(message),
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            500..=599 => ApiError::Server(message),
            _ => ApiError::Unknown(message),
        }
    }

    /// Whether this error came from deliberate cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// The user-facing message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Cancelled => "request cancelled",
            ApiError::Validation(m)
            | ApiError::Unauthorized(m)
            | ApiError::NotFound(m)
            | ApiError::Server(m)
            | ApiError::Storage(m)
            | ApiError::Config(m)
            | ApiError::Unknown(m) => m,
        }
    }
}

/// Result type alias using ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
