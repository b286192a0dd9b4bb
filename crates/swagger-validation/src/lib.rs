//! Swagger Validation
//!
//! Request parameter validation against Swagger/OpenAPI 2.0 metadata.
//!
//! A route's parameters are described by [`ParameterDescriptor`]s, each
//! holding the parameter's location, its declared [`Schema`] and the value
//! found in the request. [`ParameterCheck::check_params`] validates all of
//! them, walking arrays and objects recursively, and reports every failure
//! at once as a single [`BadParameters`] error (HTTP 400).
//!
//! Header, security and transport-scheme checks live in
//! `swagger-validation-checks`.
//!
//! # Example
//!
//! ```rust
//! use swagger_validation::{check_params, ParameterDescriptor};
//! use serde_json::json;
//!
//! let param = ParameterDescriptor::from_json(&json!({
//!     "in": "query",
//!     "name": "limit",
//!     "type": "integer",
//!     "format": "int32",
//!     "maximum": 100,
//!     "value": 500
//! })).unwrap();
//!
//! let err = check_params(&[param]).unwrap_err();
//! assert_eq!(err.failures().as_slice()[0].path, "query.limit");
//! ```

// Public modules
pub mod check;
pub mod config;
pub mod constraints;
pub mod errors;
pub mod formats;
pub mod json_schema;
pub mod scalars;
pub mod schema;
pub mod types;
pub mod validators;

// Re-export commonly used types
pub use check::{check_params, ParameterCheck};
pub use config::ValidationConfig;
pub use constraints::{ArrayConstraints, NumericConstraints, Pattern, StringConstraints};
pub use errors::{
    BadParameters, FailureKind, SchemaError, ValidationContext, ValidationFailure,
    ValidationFailures, ValidationResult,
};
pub use json_schema::parameters_from_json;
pub use schema::{ParameterDescriptor, Schema};
pub use types::{Format, Location, ParameterType, Value};
pub use validators::{validate, validate_parameter, validate_value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
