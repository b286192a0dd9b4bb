//! swagger-validation-checks: request-level checks around parameter validation
//!
//! The collaborators a request pipeline runs next to
//! `swagger_validation::check_params`:
//! - [`HeaderCheck`]: `Content-Type` against `consumes`/`produces`, and the
//!   response against the request's `Accept`
//! - [`SecurityCheck`]: credentials against the declared security schemes
//! - [`check_scheme`]: the request's transport scheme
//!
//! Each check returns `swagger_validation_common::HttpError` on rejection.

pub mod header;
pub mod parsed_schema;
pub mod scheme;
pub mod security;

// Re-exports
pub use header::{AcceptHeader, HeaderCheck, MediaType};
pub use parsed_schema::ParsedSchema;
pub use scheme::check_scheme;
pub use security::{ApiKeyLocation, SecurityCheck, SecurityScheme};

// Re-export shared HTTP types from swagger-validation-common
pub use swagger_validation_common::{HttpError, MessageLike, RequestLike, ResponseLike};
