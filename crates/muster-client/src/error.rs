//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error code from server.
        code: String,
        /// Error message from server.
        message: String,
    },

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_)) || matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_)) || matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Check if the request never got a response (connect failure or timeout).
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_connect() || e.is_timeout())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error response from the server.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default = "unknown_code")]
    pub code: String,
    #[serde(alias = "error")]
    pub message: String,
}

fn unknown_code() -> String {
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let api = |status| Error::Api {
            status,
            code: "x".to_string(),
            message: "y".to_string(),
        };
        assert!(api(404).is_not_found());
        assert!(api(401).is_auth_error());
        assert!(api(503).is_server_error());
        assert!(!api(400).is_server_error());
        assert!(Error::NotFound("workspace".to_string()).is_not_found());
    }

    #[test]
    fn test_error_response_accepts_error_field() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"bad token"}"#).unwrap();
        assert_eq!(parsed.code, "unknown");
        assert_eq!(parsed.message, "bad token");
    }
}
