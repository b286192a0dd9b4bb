//! Core type system for parameter validation
//!
//! This module defines the runtime values being validated and the closed
//! enums (location, type, format) a Swagger parameter object declares.

use crate::errors::SchemaError;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Value Enum - Runtime values to be validated
// ============================================================================

/// Runtime value that can be validated
///
/// Integers are stored as `i128` so that both the signed and unsigned 64-bit
/// ranges are representable and the int64 bound check can actually fire.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value (treated as "not set")
    Null,
    /// Native boolean value
    Bool(bool),
    /// Integer value
    Int(i128),
    /// Float value (f64)
    Float(f64),
    /// String value
    String(String),
    /// List/Array of values
    List(Vec<Value>),
    /// Object/Dictionary (key-value pairs, insertion ordered)
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// "Is set" semantics: everything but null counts, including `0`,
    /// `false` and `""`.
    pub fn is_present(&self) -> bool {
        !self.is_null()
    }

    /// Zero-length values skip every scalar check.
    pub fn is_zero_length(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Look up a property of an object value
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Structural equality used for `uniqueItems`.
    ///
    /// Numbers compare by value across `Int`/`Float`, and object keys compare
    /// regardless of order.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(n), Self::Float(f)) | (Self::Float(f), Self::Int(n)) => {
                integral(*f) == Some(*n)
            }
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_as(y))
            }
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| other.get(k).map_or(false, |o| v.same_as(o)))
            }
            _ => false,
        }
    }
}

/// The exact integer a float holds, if it holds one within `i128` range
pub(crate) fn integral(f: f64) -> Option<i128> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1.0e38 {
        Some(f as i128)
    } else {
        None
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Int(n.into())
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i.into())
                } else if let Some(u) = n.as_u64() {
                    Value::Int(u.into())
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(fields) => {
                Value::Object(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        value.clone().into()
    }
}

// ============================================================================
// Location
// ============================================================================

/// Where a parameter's value originates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Request body (validated against the parameter's `schema`)
    Body,
    /// Form field
    FormData,
    /// HTTP header
    Header,
    /// Path segment (e.g., /pets/{id})
    Path,
    /// Query string (e.g., ?page=1)
    Query,
}

impl Location {
    /// Get the Swagger spelling of this location
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::FormData => "formData",
            Self::Header => "header",
            Self::Path => "path",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "body" => Ok(Self::Body),
            "formData" => Ok(Self::FormData),
            "header" => Ok(Self::Header),
            "path" => Ok(Self::Path),
            "query" => Ok(Self::Query),
            other => Err(SchemaError::UnknownLocation(other.to_string())),
        }
    }
}

// ============================================================================
// ParameterType
// ============================================================================

/// Declared data type of a parameter or schema
///
/// `Other` keeps type names this engine doesn't know about (Swagger `file`,
/// vendor extensions); those pass through unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
    Other(String),
}

impl ParameterType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for ParameterType {
    fn from(s: &str) -> Self {
        match s {
            "boolean" => Self::Boolean,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "string" => Self::String,
            "array" => Self::Array,
            "object" => Self::Object,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Format
// ============================================================================

/// Format refining a declared type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    Float,
    Double,
    /// Base64 encoded characters
    Byte,
    /// Sequence of octets written as `0`/`1` digits
    Binary,
    /// Full date (YYYY-MM-DD)
    Date,
    /// ISO 8601 extended date-time (`datetime` or `date-time`)
    DateTime,
    Password,
    Other(String),
}

impl Format {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Byte => "byte",
            Self::Binary => "binary",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Password => "password",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Format {
    fn from(s: &str) -> Self {
        match s {
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "float" => Self::Float,
            "double" => Self::Double,
            "byte" => Self::Byte,
            "binary" => Self::Binary,
            "date" => Self::Date,
            "datetime" | "date-time" => Self::DateTime,
            "password" => Self::Password,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
