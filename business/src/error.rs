//! Error taxonomy shared by all API operations.

use serde::Deserialize;
use thiserror::Error;

/// Error returned by API operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No credential is available for an operation that requires one.
    #[error("No token found. Please log in.")]
    MissingCredential,
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The server answered with a non-success status and no usable detail.
    #[error("API returned status: {0}")]
    Status(u16),
    /// The server rejected the request with an explanation worth showing.
    #[error("{0}")]
    Denied(String),
    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self::Denied(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Whether this error came back as a 401, meaning the stored
    /// credential is no longer accepted by the server.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }
}

impl From<crate::http::HttpError> for ApiError {
    fn from(e: crate::http::HttpError) -> Self {
        Self::Transport(e.message)
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct DetailBody {
    detail: Option<String>,
}

/// Extracts the `detail` field from an error response body, falling back to a
/// default message. Django REST Framework reports most failures this way.
pub fn extract_detail(response_bytes: &[u8], default: &str) -> String {
    serde_json::from_slice::<DetailBody>(response_bytes)
        .map(|body| body.detail.unwrap_or_else(|| default.to_owned()))
        .unwrap_or_else(|_| default.to_owned())
}
