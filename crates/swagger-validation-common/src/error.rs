//! HTTP error types raised by the validation layer

use crate::http::HttpStatus;
use thiserror::Error;

/// Result type alias for checks that may reject a request
pub type Result<T> = std::result::Result<T, HttpError>;

/// Client- or server-facing HTTP errors
///
/// Each variant carries the message intended for the client. Detailed
/// diagnostics belong in logs, not in these messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl HttpError {
    /// Get the HTTP status for this error
    pub fn status(&self) -> HttpStatus {
        match self {
            HttpError::BadRequest(_) => HttpStatus::BAD_REQUEST,
            HttpError::Unauthorized(_) => HttpStatus::UNAUTHORIZED,
            HttpError::NotFound(_) => HttpStatus::NOT_FOUND,
            HttpError::NotAcceptable(_) => HttpStatus::NOT_ACCEPTABLE,
            HttpError::InternalServerError(_) => HttpStatus::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.status().code()
    }

    /// The client-facing message, without the status prefix
    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::NotFound(msg)
            | HttpError::NotAcceptable(msg)
            | HttpError::InternalServerError(msg) => msg,
        }
    }

    /// Returns true if the client is at fault (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_bad_request() {
        let err = HttpError::BadRequest("Bad parameters passed in request".to_string());
        assert_eq!(err.to_string(), "Bad request: Bad parameters passed in request");
    }

    #[test]
    fn test_error_display_not_acceptable() {
        let err = HttpError::NotAcceptable("Unacceptable content detected".to_string());
        assert_eq!(err.to_string(), "Not acceptable: Unacceptable content detected");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(HttpError::BadRequest(String::new()).status_code(), 400);
        assert_eq!(HttpError::Unauthorized(String::new()).status_code(), 401);
        assert_eq!(HttpError::NotFound(String::new()).status_code(), 404);
        assert_eq!(HttpError::NotAcceptable(String::new()).status_code(), 406);
        assert_eq!(HttpError::InternalServerError(String::new()).status_code(), 500);
    }

    #[test]
    fn test_message_strips_prefix() {
        let err = HttpError::NotFound("Unallowed scheme (ftp) in request".to_string());
        assert_eq!(err.message(), "Unallowed scheme (ftp) in request");
    }

    #[test]
    fn test_is_client_error() {
        assert!(HttpError::Unauthorized("x".to_string()).is_client_error());
        assert!(!HttpError::InternalServerError("x".to_string()).is_client_error());
    }
}
