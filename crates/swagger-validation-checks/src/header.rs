//! Content-type checks
//!
//! Compares the `Content-Type` of requests and responses against the
//! declared `consumes`/`produces` lists, and a response against the
//! request's `Accept` header. Media types match with `*` wildcards on either
//! side.

use std::cmp::Ordering;
use std::collections::HashMap;
use swagger_validation_common::{HttpError, MessageLike, RequestLike, ResponseLike, Result};
use tracing::debug;

// ============================================================================
// Media Type
// ============================================================================

/// Parsed media type
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
    /// Main type (e.g., "application", "text", "*")
    pub r#type: String,
    /// Subtype (e.g., "json", "html", "*")
    pub subtype: String,
    /// Parameters (e.g., "charset=utf-8")
    pub params: HashMap<String, String>,
    /// Quality value (0.0 - 1.0)
    pub quality: f32,
}

impl MediaType {
    /// Parse a media type string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (type_part, params) = match s.split_once(';') {
            Some((t, p)) => (t.trim(), Some(p)),
            None => (s, None),
        };

        let (r#type, subtype) = type_part.split_once('/')?;
        let r#type = r#type.trim().to_lowercase();
        let subtype = subtype.trim().to_lowercase();
        if r#type.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut media_type = Self {
            r#type,
            subtype,
            params: HashMap::new(),
            quality: 1.0,
        };

        if let Some(param_str) = params {
            for param in param_str.split(';') {
                if let Some((key, value)) = param.trim().split_once('=') {
                    let key = key.trim().to_lowercase();
                    let value = value.trim().trim_matches('"').to_string();

                    if key == "q" {
                        media_type.quality = value.parse::<f32>().map_or(1.0, |q| q.clamp(0.0, 1.0));
                    } else {
                        media_type.params.insert(key, value);
                    }
                }
            }
        }

        Some(media_type)
    }

    pub fn new(r#type: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            subtype: subtype.into(),
            params: HashMap::new(),
            quality: 1.0,
        }
    }

    pub fn any() -> Self {
        Self::new("*", "*")
    }

    /// Check if this media type matches another; parameters are ignored
    pub fn matches(&self, other: &MediaType) -> bool {
        let type_matches = self.r#type == "*" || other.r#type == "*" || self.r#type == other.r#type;
        let subtype_matches =
            self.subtype == "*" || other.subtype == "*" || self.subtype == other.subtype;
        type_matches && subtype_matches
    }

    /// Get specificity score (higher = more specific)
    pub fn specificity(&self) -> u8 {
        match (&self.r#type[..], &self.subtype[..]) {
            ("*", "*") => 0,
            ("*", _) => 1,
            (_, "*") => 2,
            _ => 3,
        }
    }

    /// The bare `type/subtype` essence
    pub fn essence(&self) -> String {
        format!("{}/{}", self.r#type, self.subtype)
    }
}

impl Eq for MediaType {}

impl PartialOrd for MediaType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MediaType {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher quality first, then higher specificity
        other
            .quality
            .partial_cmp(&self.quality)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.specificity().cmp(&self.specificity()))
    }
}

// ============================================================================
// Accept Header
// ============================================================================

/// Parsed Accept header
#[derive(Debug, Clone)]
pub struct AcceptHeader {
    /// Media types in order of preference
    pub media_types: Vec<MediaType>,
}

impl AcceptHeader {
    /// Parse an Accept header value
    pub fn parse(header: &str) -> Self {
        let mut media_types: Vec<MediaType> = header.split(',').filter_map(MediaType::parse).collect();
        media_types.sort();
        Self { media_types }
    }

    /// Get the preferred media type
    pub fn preferred(&self) -> Option<&MediaType> {
        self.media_types.first()
    }

    /// Check if a media type is acceptable; `q=0` entries never accept
    pub fn accepts(&self, media_type: &MediaType) -> bool {
        self.quality_for(media_type) > 0.0
    }

    /// Quality of the most specific entry matching `media_type`
    pub fn quality_for(&self, media_type: &MediaType) -> f32 {
        self.media_types
            .iter()
            .filter(|m| m.matches(media_type))
            .max_by_key(|m| m.specificity())
            .map_or(0.0, |m| m.quality)
    }
}

impl Default for AcceptHeader {
    fn default() -> Self {
        Self {
            media_types: vec![MediaType::any()],
        }
    }
}

// ============================================================================
// Header Checks
// ============================================================================

/// The media types listed in a message's `Content-Type`
///
/// The header is comma-split and parameters are dropped, so
/// `"application/json; charset=utf-8"` yields `application/json`.
pub fn content_types<M: MessageLike + ?Sized>(message: &M) -> Vec<MediaType> {
    message
        .content_type()
        .map(|value| value.split(',').filter_map(MediaType::parse).collect())
        .unwrap_or_default()
}

fn essences(content: &[MediaType]) -> Vec<String> {
    content.iter().map(MediaType::essence).collect()
}

fn matches_declared(content: &[MediaType], declared: &[String]) -> bool {
    declared
        .iter()
        .filter_map(|d| MediaType::parse(d))
        .any(|d| content.iter().any(|c| c.matches(&d)))
}

/// Content-type checks for one endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderCheck;

impl HeaderCheck {
    pub fn new() -> Self {
        Self
    }

    /// A request carrying a body must declare one of the `consumes` types
    pub fn check_incoming_content<R>(&self, request: &R, consumes: &[String]) -> Result<()>
    where
        R: RequestLike + ?Sized,
    {
        if request.body_size().unwrap_or(0) == 0 {
            debug!("Skipping content check for request without body");
            return Ok(());
        }

        let content = content_types(request);
        if matches_declared(&content, consumes) {
            return Ok(());
        }

        debug!(content_types = ?essences(&content), ?consumes, "Rejecting request content type");
        Err(HttpError::NotAcceptable(
            "Unacceptable header was passed into this endpoint".to_string(),
        ))
    }

    /// A response with a `Content-Type` must use one of the `produces` types
    pub fn check_outgoing_content<S>(&self, response: &S, produces: &[String]) -> Result<()>
    where
        S: ResponseLike + ?Sized,
    {
        let content = content_types(response);
        if content.is_empty() {
            debug!("Skipping content check for response without content type");
            return Ok(());
        }

        if matches_declared(&content, produces) {
            return Ok(());
        }

        debug!(content_types = ?essences(&content), ?produces, "Rejecting response content type");
        Err(HttpError::InternalServerError("Invalid content detected".to_string()))
    }

    /// The response `Content-Type` must be acceptable to the request
    pub fn check_accept_header<R, S>(&self, request: &R, response: &S) -> Result<()>
    where
        R: RequestLike + ?Sized,
        S: ResponseLike + ?Sized,
    {
        let accept = match request.header("accept") {
            Some(value) if !value.trim().is_empty() => AcceptHeader::parse(value),
            _ => {
                debug!("Skipping accept check for request without Accept header");
                return Ok(());
            }
        };

        let content = content_types(response);
        if content.iter().any(|c| accept.accepts(c)) {
            return Ok(());
        }

        debug!(
            content_types = ?essences(&content),
            preferred = ?accept.preferred().map(MediaType::essence),
            "Response content type not accepted"
        );
        Err(HttpError::NotAcceptable("Unacceptable content detected".to_string()))
    }
}
