//! Error types for generation service calls.

use thiserror::Error;

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur talking to the generation service.
#[derive(Debug, Error)]
pub enum GenError {
    /// The service credential is missing from the environment. Fatal to any
    /// generation call; checked on first use, not at startup.
    #[error("API key is missing. Set {0}.")]
    MissingCredential(&'static str),

    /// Transport-level failure (connect, timeout, body read).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, best effort.
        message: String,
    },

    /// The response body did not match the vendor schema.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl GenError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures and server-side (5xx) errors are retryable;
    /// missing credentials, client (4xx) errors, and malformed bodies are
    /// not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500,
            Self::MissingCredential(_) | Self::Malformed(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryability() {
        assert!(GenError::Api {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(!GenError::Api {
            status: 400,
            message: String::new()
        }
        .is_retryable());
        assert!(!GenError::MissingCredential("KEY").is_retryable());
        assert!(!GenError::Malformed("oops".to_string()).is_retryable());
    }
}
