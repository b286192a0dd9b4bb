//! Transport-scheme check

use swagger_validation_common::{HttpError, RequestLike, Result};
use tracing::debug;

/// Succeeds when `schemes` is empty or lists the request's URI scheme
///
/// An empty list is not an error here; stricter routers reject it with 404,
/// so callers wanting that must test `schemes.is_empty()` themselves.
pub fn check_scheme<R>(request: &R, schemes: &[String]) -> Result<()>
where
    R: RequestLike + ?Sized,
{
    let scheme = request.uri_scheme();
    if schemes.is_empty() || schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
        return Ok(());
    }

    debug!(scheme, ?schemes, "Rejecting request scheme");
    Err(HttpError::NotFound(format!("Unallowed scheme ({}) in request", scheme)))
}
