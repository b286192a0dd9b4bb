//! Validation error types
//!
//! Validation failures are ordinary, expected outcomes and are collected as
//! values. Schema-authoring faults (`SchemaError`) are a different class and
//! are surfaced immediately.

use std::fmt;
use swagger_validation_common::HttpError;
use thiserror::Error;

// ============================================================================
// Validation Result
// ============================================================================

/// Validation outcome: success, or every failure found
pub type ValidationResult<T> = Result<T, ValidationFailures>;

// ============================================================================
// Failure Kinds
// ============================================================================

/// Classification of a single validation failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    #[error("Required value was not set")]
    RequiredValueMissing,

    #[error("Value is not a boolean")]
    ValueNotBoolean,

    #[error("Value is not an integer")]
    ValueNotInteger,

    #[error("Value is not a number")]
    ValueNotNumber,

    #[error("Value is not a string")]
    ValueNotString,

    #[error("Value is not an array")]
    ValueNotArray,

    #[error("Value is not an object")]
    ValueNotObject,

    #[error("Value exceeds int32 bounds")]
    ValueExceedsInt32Bounds,

    #[error("Value exceeds int64 bounds")]
    ValueExceedsInt64Bounds,

    #[error("Value exceeds maximum")]
    ValueExceedsMaximum,

    #[error("Value exceeds exclusiveMaximum")]
    ValueExceedsExclusiveMaximum,

    #[error("Value exceeds minimum")]
    ValueExceedsMinimum,

    #[error("Value exceeds exclusiveMinimum")]
    ValueExceedsExclusiveMinimum,

    #[error("Value is not a byte")]
    ValueNotByte,

    #[error("Value is not a binary")]
    ValueNotBinary,

    #[error("Value is not a date")]
    ValueNotDate,

    #[error("Value is not a datetime")]
    ValueNotDatetime,

    #[error("Value exceeds maxLength")]
    ValueExceedsMaxLength,

    #[error("Value exceeds minLength")]
    ValueExceedsMinLength,

    #[error("Value does not match pattern")]
    ValueDoesNotMatchPattern,

    #[error("Size of array exceeds maxItems")]
    ArraySizeExceedsMaxItems,

    #[error("Size of array exceeds minItems")]
    ArraySizeExceedsMinItems,

    #[error("Duplicate array items found when should be unique")]
    DuplicateArrayItems,
}

impl FailureKind {
    /// Stable machine-readable code (used as a log field)
    pub fn code(&self) -> &'static str {
        match self {
            Self::RequiredValueMissing => "required_value_missing",
            Self::ValueNotBoolean => "value_not_boolean",
            Self::ValueNotInteger => "value_not_integer",
            Self::ValueNotNumber => "value_not_number",
            Self::ValueNotString => "value_not_string",
            Self::ValueNotArray => "value_not_array",
            Self::ValueNotObject => "value_not_object",
            Self::ValueExceedsInt32Bounds => "value_exceeds_int32_bounds",
            Self::ValueExceedsInt64Bounds => "value_exceeds_int64_bounds",
            Self::ValueExceedsMaximum => "value_exceeds_maximum",
            Self::ValueExceedsExclusiveMaximum => "value_exceeds_exclusive_maximum",
            Self::ValueExceedsMinimum => "value_exceeds_minimum",
            Self::ValueExceedsExclusiveMinimum => "value_exceeds_exclusive_minimum",
            Self::ValueNotByte => "value_not_byte",
            Self::ValueNotBinary => "value_not_binary",
            Self::ValueNotDate => "value_not_date",
            Self::ValueNotDatetime => "value_not_datetime",
            Self::ValueExceedsMaxLength => "value_exceeds_max_length",
            Self::ValueExceedsMinLength => "value_exceeds_min_length",
            Self::ValueDoesNotMatchPattern => "value_does_not_match_pattern",
            Self::ArraySizeExceedsMaxItems => "array_size_exceeds_max_items",
            Self::ArraySizeExceedsMinItems => "array_size_exceeds_min_items",
            Self::DuplicateArrayItems => "duplicate_array_items",
        }
    }
}

// ============================================================================
// Single Validation Failure
// ============================================================================

/// A single validation failure
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}: {message}")]
pub struct ValidationFailure {
    /// What went wrong
    pub kind: FailureKind,

    /// Dotted path of the offending value (e.g., "query.tags[1]")
    pub path: String,

    /// Human-readable message
    pub message: String,
}

impl ValidationFailure {
    /// Create a failure with the kind's default message
    pub fn new(kind: FailureKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: kind.to_string(),
        }
    }

    /// Create a failure whose message carries extra detail
    pub fn with_detail(kind: FailureKind, path: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self {
            kind,
            path: path.into(),
            message: format!("{} ({})", kind, detail),
        }
    }
}

// ============================================================================
// Validation Failures Collection
// ============================================================================

/// Ordered collection of validation failures
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationFailures {
    failures: Vec<ValidationFailure>,
}

impl ValidationFailures {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Check if there are any failures
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get the number of failures
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Add a failure to the collection
    pub fn add(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Record a failure at the context's current path
    pub fn fail(&mut self, kind: FailureKind, ctx: &ValidationContext) {
        self.add(ValidationFailure::new(kind, ctx.current_path()));
    }

    /// Record a failure with extra detail at the context's current path
    pub fn fail_with(&mut self, kind: FailureKind, ctx: &ValidationContext, detail: impl fmt::Display) {
        self.add(ValidationFailure::with_detail(kind, ctx.current_path(), detail));
    }

    /// Ok if no failures, Err otherwise
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn as_slice(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    /// Kinds of every failure, in order
    pub fn kinds(&self) -> Vec<FailureKind> {
        self.failures.iter().map(|f| f.kind).collect()
    }

    /// Check whether a failure of the given kind was recorded
    pub fn contains(&self, kind: FailureKind) -> bool {
        self.failures.iter().any(|f| f.kind == kind)
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failure(s)", self.failures.len())
    }
}

impl std::error::Error for ValidationFailures {}

impl IntoIterator for ValidationFailures {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

// ============================================================================
// Aggregate Error
// ============================================================================

const BAD_PARAMETERS: &str = "Bad parameters passed in request";

/// Aggregate error raised when any request parameter failed validation
///
/// The client sees a generic message; the individual failures stay available
/// through [`BadParameters::failures`] for logging.
#[derive(Error, Debug, Clone)]
#[error("Bad parameters passed in request")]
pub struct BadParameters {
    failures: ValidationFailures,
    expose_details: bool,
}

impl BadParameters {
    pub fn new(failures: ValidationFailures) -> Self {
        Self {
            failures,
            expose_details: false,
        }
    }

    /// Carry the failure list into the client-facing message
    pub fn exposing_details(mut self, expose: bool) -> Self {
        self.expose_details = expose;
        self
    }

    pub fn failures(&self) -> &ValidationFailures {
        &self.failures
    }

    /// The message handed to the client
    pub fn client_message(&self) -> String {
        if !self.expose_details {
            return BAD_PARAMETERS.to_string();
        }
        let details: Vec<String> = self.failures.iter().map(|f| f.to_string()).collect();
        format!("{}: {}", BAD_PARAMETERS, details.join("; "))
    }
}

impl From<BadParameters> for HttpError {
    fn from(err: BadParameters) -> Self {
        HttpError::BadRequest(err.client_message())
    }
}

// ============================================================================
// Schema Errors
// ============================================================================

/// Faults in the schema description itself (authoring bugs, not bad
/// request data). These are fatal to the request.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Unrecognized parameter location: {0}")]
    UnknownLocation(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Malformed schema document: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SchemaError> for HttpError {
    fn from(err: SchemaError) -> Self {
        HttpError::InternalServerError(err.to_string())
    }
}

// ============================================================================
// Validation Context
// ============================================================================

/// Tracks the current location while walking nested values
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    path: Vec<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Context rooted at a parameter (e.g., "query.limit")
    pub fn for_parameter(location: &str, name: &str) -> Self {
        let mut ctx = Self::new();
        ctx.push(location);
        if !name.is_empty() {
            ctx.push(name);
        }
        ctx
    }

    /// Push a property name onto the path
    pub fn push(&mut self, field: &str) {
        self.path.push(field.to_string());
    }

    /// Push an array index onto the path
    pub fn push_index(&mut self, index: usize) {
        self.path.push(format!("[{}]", index));
    }

    pub fn pop(&mut self) {
        self.path.pop();
    }

    /// Current path as a string (e.g., "body.pets[0].name")
    pub fn current_path(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            if !out.is_empty() && !segment.starts_with('[') {
                out.push('.');
            }
            out.push_str(segment);
        }
        out
    }
}
