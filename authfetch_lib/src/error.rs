//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream client errors
/// and adding input validation failures.
#[derive(Debug)]
pub enum AuthFetchError {
    /// An error from the underlying client. The user has already been
    /// notified by the time this is returned.
    Api(authfetch_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for AuthFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AuthFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<authfetch_api::Error> for AuthFetchError {
    fn from(e: authfetch_api::Error) -> Self {
        Self::Api(e)
    }
}
