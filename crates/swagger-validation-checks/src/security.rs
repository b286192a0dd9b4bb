//! Security-scheme checks
//!
//! Checks that a request carries the credentials one of the endpoint's
//! declared security schemes asks for. Credentials are only checked for
//! shape; verifying them belongs to the identity provider.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;
use std::collections::BTreeMap;
use swagger_validation_common::{HttpError, RequestLike, Result};
use tracing::debug;

// ============================================================================
// Security Schemes
// ============================================================================

/// API key location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
}

/// A Swagger 2.0 security scheme
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    /// HTTP basic authentication
    #[serde(rename = "basic")]
    Basic,

    /// API key passed in a header or query parameter
    #[serde(rename = "apiKey")]
    ApiKey {
        name: String,
        #[serde(rename = "in")]
        location: ApiKeyLocation,
    },

    /// OAuth2 bearer token
    #[serde(rename = "oauth2")]
    OAuth2 {
        #[serde(default)]
        flow: Option<String>,
        #[serde(default)]
        scopes: BTreeMap<String, String>,
    },
}

impl SecurityScheme {
    pub fn api_key_header(name: impl Into<String>) -> Self {
        Self::ApiKey {
            name: name.into(),
            location: ApiKeyLocation::Header,
        }
    }

    pub fn api_key_query(name: impl Into<String>) -> Self {
        Self::ApiKey {
            name: name.into(),
            location: ApiKeyLocation::Query,
        }
    }

    pub fn oauth2() -> Self {
        Self::OAuth2 {
            flow: None,
            scopes: BTreeMap::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::ApiKey { .. } => "apiKey",
            Self::OAuth2 { .. } => "oauth2",
        }
    }

    /// Check whether the request meets this scheme
    pub fn is_met_by<R: RequestLike + ?Sized>(&self, request: &R) -> bool {
        match self {
            Self::Basic => extract_credentials(request.header("authorization"), "Basic")
                .map_or(false, is_basic_token),
            Self::ApiKey { name, location } => {
                let key = match location {
                    ApiKeyLocation::Header => request.header(name),
                    ApiKeyLocation::Query => request.query_param(name),
                };
                key.map_or(false, |k| !k.trim().is_empty())
            }
            Self::OAuth2 { .. } => extract_credentials(request.header("authorization"), "Bearer")
                .map_or(false, |token| !token.is_empty()),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Split `"<scheme> <credentials>"`, matching the scheme case-insensitively
fn extract_credentials<'a>(header: Option<&'a str>, scheme: &str) -> Option<&'a str> {
    let (given, credentials) = header?.trim().split_once(' ')?;
    if given.eq_ignore_ascii_case(scheme) {
        Some(credentials.trim())
    } else {
        None
    }
}

/// Basic credentials are base64 of `user:password`
fn is_basic_token(token: &str) -> bool {
    match STANDARD.decode(token) {
        Ok(bytes) => String::from_utf8(bytes).map_or(false, |s| s.contains(':')),
        Err(_) => false,
    }
}

// ============================================================================
// Security Check
// ============================================================================

/// Security checks for one endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityCheck;

impl SecurityCheck {
    pub fn new() -> Self {
        Self
    }

    /// Succeeds when no scheme is declared or at least one is met
    ///
    /// An empty list is not an error here; stricter routers reject it with 401,
    /// so callers wanting that must test `schemes.is_empty()` themselves.
    pub fn check_security<R>(&self, request: &R, schemes: &[SecurityScheme]) -> Result<()>
    where
        R: RequestLike + ?Sized,
    {
        if schemes.is_empty() {
            return Ok(());
        }

        if let Some(met) = schemes.iter().find(|scheme| scheme.is_met_by(request)) {
            debug!(scheme = met.type_name(), "Security scheme met");
            return Ok(());
        }

        debug!(schemes = schemes.len(), "No security scheme met");
        Err(HttpError::Unauthorized(
            "Unacceptable security passed in request".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_credentials() {
        assert_eq!(extract_credentials(Some("Bearer abc"), "Bearer"), Some("abc"));
        assert_eq!(extract_credentials(Some("bearer abc"), "Bearer"), Some("abc"));
        assert_eq!(extract_credentials(Some("Basic abc"), "Bearer"), None);
        assert_eq!(extract_credentials(Some("Bearer"), "Bearer"), None);
        assert_eq!(extract_credentials(None, "Bearer"), None);
    }

    #[test]
    fn test_basic_token() {
        // "user:pass"
        assert!(is_basic_token("dXNlcjpwYXNz"));
        // "userpass"
        assert!(!is_basic_token("dXNlcnBhc3M="));
        assert!(!is_basic_token("not base64!"));
    }

    #[test]
    fn test_deserialize_schemes() {
        let schemes: Vec<SecurityScheme> = serde_json::from_value(json!([
            {"type": "basic", "description": "HTTP basic"},
            {"type": "apiKey", "name": "api_key", "in": "header"},
            {
                "type": "oauth2",
                "flow": "implicit",
                "authorizationUrl": "https://example.com/oauth",
                "scopes": {"read:pets": "read your pets"}
            }
        ]))
        .unwrap();

        assert_eq!(schemes[0], SecurityScheme::Basic);
        assert_eq!(schemes[1], SecurityScheme::api_key_header("api_key"));
        match &schemes[2] {
            SecurityScheme::OAuth2 { flow, scopes } => {
                assert_eq!(flow.as_deref(), Some("implicit"));
                assert!(scopes.contains_key("read:pets"));
            }
            other => panic!("unexpected scheme {:?}", other),
        }
    }

    #[test]
    fn test_unknown_scheme_type_rejected() {
        let result = serde_json::from_value::<SecurityScheme>(json!({"type": "digest"}));
        assert!(result.is_err());
    }
}
