//! Route metadata handed over by the upstream router

use crate::security::SecurityScheme;
use serde::Deserialize;
use swagger_validation::{ParameterDescriptor, SchemaError};

/// The Swagger metadata of one matched route, with the request's
/// parameter values already filled in
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParsedSchema {
    pub security: Vec<SecurityScheme>,
    pub schemes: Vec<String>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    #[serde(rename = "parameters", alias = "params")]
    pub params: Vec<ParameterDescriptor>,
}

impl ParsedSchema {
    /// Build from JSON
    ///
    /// # Example
    ///
    /// ```
    /// use swagger_validation_checks::ParsedSchema;
    /// use serde_json::json;
    ///
    /// let schema = ParsedSchema::from_json(&json!({
    ///     "schemes": ["https"],
    ///     "parameters": [{"in": "query", "name": "q", "type": "string", "value": "cats"}]
    /// })).unwrap();
    /// assert_eq!(schema.params.len(), 1);
    /// assert!(schema.security.is_empty());
    /// ```
    pub fn from_json(json: &serde_json::Value) -> Result<Self, SchemaError> {
        Ok(Self::deserialize(json)?)
    }
}
