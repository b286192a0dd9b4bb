//! Validation constraints for different types
//!
//! This module defines constraints for validating numbers, strings and
//! arrays. Object constraints live on [`crate::schema::Schema`] directly.

use crate::errors::SchemaError;
use regex::Regex;
use std::fmt;

// ============================================================================
// Pattern
// ============================================================================

/// A `pattern` constraint, compiled once when the schema is built
///
/// Matching is a search: the expression may match anywhere in the value
/// unless it anchors itself with `^`/`$`.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern
    pub fn new(source: impl Into<String>) -> Result<Self, SchemaError> {
        let source = source.into();
        match Regex::new(&source) {
            Ok(regex) => Ok(Self { source, regex }),
            Err(err) => Err(SchemaError::InvalidPattern {
                pattern: source,
                source: err,
            }),
        }
    }

    /// The expression as written in the schema
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

// ============================================================================
// Numeric Constraints
// ============================================================================

/// Range constraints for `integer` and `number`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericConstraints {
    /// Maximum value (inclusive)
    pub maximum: Option<f64>,
    /// Maximum value (exclusive)
    pub exclusive_maximum: Option<f64>,
    /// Minimum value (inclusive)
    pub minimum: Option<f64>,
    /// Minimum value (exclusive)
    pub exclusive_minimum: Option<f64>,
}

impl NumericConstraints {
    pub fn is_empty(&self) -> bool {
        self.maximum.is_none()
            && self.exclusive_maximum.is_none()
            && self.minimum.is_none()
            && self.exclusive_minimum.is_none()
    }
}

// ============================================================================
// String Constraints
// ============================================================================

/// Constraints for `string`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringConstraints {
    /// Maximum length (in characters, not bytes)
    pub max_length: Option<usize>,
    /// Minimum length (in characters, not bytes)
    pub min_length: Option<usize>,
    pub pattern: Option<Pattern>,
}

// ============================================================================
// Array Constraints
// ============================================================================

/// Structural constraints for `array`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayConstraints {
    /// Maximum number of items
    pub max_items: Option<usize>,
    /// Minimum number of items
    pub min_items: Option<usize>,
    /// Whether all items must be distinct
    pub unique_items: bool,
}
