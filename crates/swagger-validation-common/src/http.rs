//! Shared HTTP types for the validation layer.
//!
//! Requests and responses belong to the host server; these traits are the
//! minimal accessor contract the checks need from them.

use std::collections::HashMap;

/// HTTP status code wrapper with helper methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatus(pub u16);

impl HttpStatus {
    // Status codes raised by the validation layer
    pub const OK: Self = Self(200);
    pub const BAD_REQUEST: Self = Self(400);
    pub const UNAUTHORIZED: Self = Self(401);
    pub const NOT_FOUND: Self = Self(404);
    pub const NOT_ACCEPTABLE: Self = Self(406);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    /// Returns the status code as u16.
    pub fn code(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a success status (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Returns true if this is a client error status (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// Returns true if this is a server error status (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for HttpStatus {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.0
    }
}

/// Header access shared by requests and responses.
///
/// Implementors store header names lowercased.
pub trait MessageLike {
    /// Returns the message headers (lowercase keys).
    fn headers(&self) -> &HashMap<String, String>;

    /// Gets a header value by name (case-insensitive).
    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(&name.to_lowercase())
            .map(|s| s.as_str())
    }

    /// Returns the Content-Type header value.
    fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

/// Trait for types that represent incoming HTTP requests.
pub trait RequestLike: MessageLike {
    /// Returns the URI scheme (e.g. "http", "https").
    fn uri_scheme(&self) -> &str;

    /// Returns the size of the body stream, if known.
    fn body_size(&self) -> Option<usize>;

    /// Returns the decoded query parameters.
    fn query_params(&self) -> &HashMap<String, String>;

    /// Gets a query parameter by name.
    fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params().get(name).map(|s| s.as_str())
    }
}

/// Trait for types that represent outgoing HTTP responses.
pub trait ResponseLike: MessageLike {
    /// Returns the HTTP status code.
    fn status_code(&self) -> u16;

    /// Returns the HTTP status.
    fn status(&self) -> HttpStatus {
        HttpStatus(self.status_code())
    }
}
