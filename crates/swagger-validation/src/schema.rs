//! Parameter descriptors and their nested schemas
//!
//! A [`ParameterDescriptor`] pairs one request input (its location, name and
//! actual value) with the constraints declared for it. Nested shapes (array
//! `items`, object `properties`, the body `schema`) are [`Schema`]s; the
//! validator walks a schema and a value side by side instead of building
//! merged descriptors per element.

use crate::constraints::{ArrayConstraints, NumericConstraints, Pattern, StringConstraints};
use crate::types::{Format, Location, ParameterType, Value};
use std::collections::BTreeMap;

// ============================================================================
// Schema
// ============================================================================

/// Constraint set for one value
///
/// Only the constraints that belong to the declared type are consulted;
/// the others are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// Declared type; `None` passes through unchecked unless the shape
    /// implies one (see [`Schema::effective_type`])
    pub param_type: Option<ParameterType>,
    pub format: Option<Format>,
    pub numeric: NumericConstraints,
    pub string: StringConstraints,
    pub array: ArrayConstraints,
    /// Schema applied to every array element
    pub items: Option<Box<Schema>>,
    /// Schemas of declared object properties
    pub properties: BTreeMap<String, Schema>,
    /// Object properties that must be present
    pub required: Vec<String>,
}

impl Schema {
    pub fn new(param_type: ParameterType) -> Self {
        Self {
            param_type: Some(param_type),
            ..Default::default()
        }
    }

    pub fn boolean() -> Self {
        Self::new(ParameterType::Boolean)
    }

    pub fn integer() -> Self {
        Self::new(ParameterType::Integer)
    }

    pub fn number() -> Self {
        Self::new(ParameterType::Number)
    }

    pub fn string() -> Self {
        Self::new(ParameterType::String)
    }

    /// Array whose elements follow `items`
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(ParameterType::Array)
        }
    }

    pub fn object() -> Self {
        Self::new(ParameterType::Object)
    }

    /// The type used for dispatch.
    ///
    /// Untyped schemas that declare `properties`/`required` are walked as
    /// objects and untyped schemas with `items` as arrays, the way Swagger
    /// documents commonly omit `type: object` on body schemas.
    pub fn effective_type(&self) -> Option<ParameterType> {
        match &self.param_type {
            Some(t) => Some(t.clone()),
            None if !self.properties.is_empty() || !self.required.is_empty() => {
                Some(ParameterType::Object)
            }
            None if self.items.is_some() => Some(ParameterType::Array),
            None => None,
        }
    }

    pub fn format(mut self, format: impl Into<Format>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn maximum(mut self, max: f64) -> Self {
        self.numeric.maximum = Some(max);
        self
    }

    pub fn exclusive_maximum(mut self, max: f64) -> Self {
        self.numeric.exclusive_maximum = Some(max);
        self
    }

    pub fn minimum(mut self, min: f64) -> Self {
        self.numeric.minimum = Some(min);
        self
    }

    pub fn exclusive_minimum(mut self, min: f64) -> Self {
        self.numeric.exclusive_minimum = Some(min);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.string.max_length = Some(len);
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.string.min_length = Some(len);
        self
    }

    /// Set a compiled pattern (see [`Pattern::new`])
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.string.pattern = Some(pattern);
        self
    }

    pub fn max_items(mut self, count: usize) -> Self {
        self.array.max_items = Some(count);
        self
    }

    pub fn min_items(mut self, count: usize) -> Self {
        self.array.min_items = Some(count);
        self
    }

    pub fn unique_items(mut self, unique: bool) -> Self {
        self.array.unique_items = unique;
        self
    }

    /// Declare an object property
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Mark an object property as required
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }
}

// ============================================================================
// Parameter Descriptor
// ============================================================================

/// One request input together with its declared constraints
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub location: Location,
    /// Used by the collaborator that extracts the value; not validated here
    pub name: String,
    /// Parameter-level required flag
    pub required: bool,
    /// Actual value; `None` and `Value::Null` both mean "not set"
    pub value: Option<Value>,
    /// Constraints of non-body parameters
    pub schema: Schema,
    /// Payload schema of a body parameter
    pub body_schema: Option<Schema>,
}

impl ParameterDescriptor {
    /// Non-body parameter
    pub fn new(location: Location, name: impl Into<String>, schema: Schema) -> Self {
        Self {
            location,
            name: name.into(),
            required: false,
            value: None,
            schema,
            body_schema: None,
        }
    }

    /// Body parameter validated against `schema`
    pub fn body(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            location: Location::Body,
            name: name.into(),
            required: false,
            value: None,
            schema: Schema::default(),
            body_schema: Some(schema),
        }
    }

    pub fn query(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(Location::Query, name, schema)
    }

    pub fn path(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(Location::Path, name, schema)
    }

    pub fn header(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(Location::Header, name, schema)
    }

    pub fn form_data(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(Location::FormData, name, schema)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The value if it is set (not absent, not null)
    pub fn present_value(&self) -> Option<&Value> {
        self.value.as_ref().filter(|v| v.is_present())
    }

    /// The schema the value is checked against
    pub fn effective_schema(&self) -> Option<&Schema> {
        match self.location {
            Location::Body => self.body_schema.as_ref(),
            _ => Some(&self.schema),
        }
    }
}
