//! Loading descriptors from Swagger 2.0 JSON
//!
//! Parameter objects and schema objects are read into raw mirror structs
//! first, then checked and converted: locations are resolved, patterns are
//! compiled, and the two spellings of `required` and `exclusiveMaximum` /
//! `exclusiveMinimum` are normalised.

use crate::constraints::Pattern;
use crate::errors::SchemaError;
use crate::schema::{ParameterDescriptor, Schema};
use crate::types::{Format, Location, ParameterType, Value};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

// ============================================================================
// Raw Swagger shapes
// ============================================================================

/// `required`: a flag on parameter objects, a name list on schema objects
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRequired {
    Flag(bool),
    Names(Vec<String>),
}

/// `exclusiveMaximum`/`exclusiveMinimum`: a bound of its own, or the
/// Swagger 2.0 flag that makes `maximum`/`minimum` exclusive
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBound {
    Flag(bool),
    Value(f64),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(rename = "type")]
    param_type: Option<String>,
    format: Option<String>,

    maximum: Option<f64>,
    minimum: Option<f64>,
    exclusive_maximum: Option<RawBound>,
    exclusive_minimum: Option<RawBound>,

    max_length: Option<usize>,
    min_length: Option<usize>,
    pattern: Option<String>,

    items: Option<Box<RawSchema>>,
    max_items: Option<usize>,
    min_items: Option<usize>,
    #[serde(default)]
    unique_items: bool,

    #[serde(default)]
    properties: BTreeMap<String, RawSchema>,
    required: Option<RawRequired>,
}

#[derive(Debug, Deserialize)]
struct RawParameter {
    #[serde(rename = "in")]
    location: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: Option<serde_json::Value>,
    schema: Option<RawSchema>,
    #[serde(flatten)]
    constraints: RawSchema,
}

// ============================================================================
// Conversion
// ============================================================================

fn resolve_bound(inclusive: &mut Option<f64>, exclusive: Option<RawBound>) -> Option<f64> {
    match exclusive {
        Some(RawBound::Value(bound)) => Some(bound),
        Some(RawBound::Flag(true)) => inclusive.take(),
        Some(RawBound::Flag(false)) | None => None,
    }
}

impl RawSchema {
    fn into_schema(mut self) -> Result<Schema, SchemaError> {
        let mut schema = Schema {
            param_type: self.param_type.as_deref().map(ParameterType::from),
            format: self.format.as_deref().map(Format::from),
            ..Default::default()
        };

        schema.numeric.exclusive_maximum =
            resolve_bound(&mut self.maximum, self.exclusive_maximum.take());
        schema.numeric.exclusive_minimum =
            resolve_bound(&mut self.minimum, self.exclusive_minimum.take());
        schema.numeric.maximum = self.maximum;
        schema.numeric.minimum = self.minimum;

        schema.string.max_length = self.max_length;
        schema.string.min_length = self.min_length;
        schema.string.pattern = self.pattern.map(Pattern::new).transpose()?;

        schema.items = match self.items {
            Some(items) => Some(Box::new(items.into_schema()?)),
            None => None,
        };
        schema.array.max_items = self.max_items;
        schema.array.min_items = self.min_items;
        schema.array.unique_items = self.unique_items;

        for (name, property) in self.properties {
            schema.properties.insert(name, property.into_schema()?);
        }
        if let Some(RawRequired::Names(names)) = self.required {
            schema.required = names;
        }

        Ok(schema)
    }
}

impl RawParameter {
    fn into_descriptor(mut self) -> Result<ParameterDescriptor, SchemaError> {
        let location: Location = self.location.parse()?;

        let required = match self.constraints.required.take() {
            Some(RawRequired::Flag(flag)) => flag,
            Some(names @ RawRequired::Names(_)) => {
                self.constraints.required = Some(names);
                false
            }
            None => false,
        };

        let body_schema = match (location, self.schema) {
            (Location::Body, Some(schema)) => Some(schema.into_schema()?),
            (Location::Body, None) => {
                return Err(SchemaError::InvalidSchema(format!(
                    "body parameter '{}' declares no schema",
                    self.name
                )))
            }
            (_, _) => None,
        };

        Ok(ParameterDescriptor {
            location,
            name: self.name,
            required,
            value: self.value.map(Value::from),
            schema: self.constraints.into_schema()?,
            body_schema,
        })
    }
}

// ============================================================================
// Public API
// ============================================================================

impl Schema {
    /// Build a schema from a Swagger schema object
    ///
    /// # Example
    ///
    /// ```
    /// use swagger_validation::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::from_json(&json!({
    ///     "type": "integer",
    ///     "maximum": 10,
    ///     "exclusiveMaximum": true
    /// })).unwrap();
    /// assert_eq!(schema.numeric.exclusive_maximum, Some(10.0));
    /// assert_eq!(schema.numeric.maximum, None);
    /// ```
    pub fn from_json(json: &serde_json::Value) -> Result<Self, SchemaError> {
        RawSchema::deserialize(json)?.into_schema()
    }
}

impl ParameterDescriptor {
    /// Build a descriptor from a Swagger parameter object carrying its
    /// actual request value under `value`
    pub fn from_json(json: &serde_json::Value) -> Result<Self, SchemaError> {
        RawParameter::deserialize(json)?.into_descriptor()
    }
}

/// Build descriptors from a JSON array of parameter objects
pub fn parameters_from_json(json: &serde_json::Value) -> Result<Vec<ParameterDescriptor>, SchemaError> {
    let raw: Vec<RawParameter> = Vec::deserialize(json)?;
    raw.into_iter().map(RawParameter::into_descriptor).collect()
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawSchema::deserialize(deserializer)?
            .into_schema()
            .map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ParameterDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawParameter::deserialize(deserializer)?
            .into_descriptor()
            .map_err(serde::de::Error::custom)
    }
}
