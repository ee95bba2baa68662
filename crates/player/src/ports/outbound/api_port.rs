//! API port errors
//!
//! Transport-agnostic failures of a call against the game API. Adapters map
//! their client library errors onto these variants; the session client decides
//! what each one means for the user.

use thiserror::Error;

/// HTTP status the game API uses for a missing, invalid or expired token
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Errors that can occur when calling the game API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, timeout, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    HttpError {
        status: u16,
        /// The `error` field of the response body, when there was one
        message: Option<String>,
    },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    /// Whether the server rejected the call's credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::HttpError {
                status: STATUS_UNAUTHORIZED,
                ..
            }
        )
    }

    /// The server-provided error message, if the server sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::HttpError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unauthorized() {
        let expired = ApiError::HttpError {
            status: 401,
            message: Some("Invalid or expired token".to_string()),
        };
        assert!(expired.is_unauthorized());

        let server_error = ApiError::HttpError {
            status: 500,
            message: None,
        };
        assert!(!server_error.is_unauthorized());
        assert!(!ApiError::RequestFailed("refused".to_string()).is_unauthorized());
    }

    #[test]
    fn test_server_message() {
        let err = ApiError::HttpError {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(ApiError::ParseError("eof".to_string()).server_message(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::HttpError {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 500: no error message");
    }
}
