//! Core validation engine
//!
//! Walks a parameter's value alongside its schema. Arrays and objects get
//! their structural checks first; a structural failure ends the walk of that
//! branch, otherwise it descends element by element and property by
//! property. Scalars go to [`crate::scalars`]. Failures accumulate across
//! branches and parameters.

use crate::errors::{FailureKind, ValidationContext, ValidationFailures, ValidationResult};
use crate::scalars;
use crate::schema::{ParameterDescriptor, Schema};
use crate::types::{integral, ParameterType, Value};
use std::collections::HashSet;

// ============================================================================
// Public API
// ============================================================================

/// Validate one parameter
///
/// # Example
///
/// ```
/// use swagger_validation::{validate, ParameterDescriptor, Schema};
///
/// let param = ParameterDescriptor::query("limit", Schema::integer().maximum(100.0))
///     .required(true)
///     .value(250);
/// let failures = validate(&param).unwrap_err();
/// assert_eq!(failures.as_slice()[0].path, "query.limit");
/// ```
pub fn validate(param: &ParameterDescriptor) -> ValidationResult<()> {
    let mut failures = ValidationFailures::new();
    validate_parameter(param, &mut failures);
    failures.into_result()
}

/// Validate one parameter, appending to an existing failure list
pub fn validate_parameter(param: &ParameterDescriptor, failures: &mut ValidationFailures) {
    let mut ctx = ValidationContext::for_parameter(param.location.as_str(), &param.name);

    let value = match param.present_value() {
        Some(value) => value,
        None => {
            if param.required {
                failures.fail(FailureKind::RequiredValueMissing, &ctx);
            }
            return;
        }
    };

    if let Some(schema) = param.effective_schema() {
        validate_value(value, schema, &mut ctx, failures);
    }
}

/// Validate a value against a schema at the context's current path
pub fn validate_value(
    value: &Value,
    schema: &Schema,
    ctx: &mut ValidationContext,
    failures: &mut ValidationFailures,
) {
    match schema.effective_type() {
        Some(ParameterType::Array) => validate_array(value, schema, ctx, failures),
        Some(ParameterType::Object) => validate_object(value, schema, ctx, failures),
        _ if value.is_zero_length() => {}
        _ => scalars::check_scalar(value, schema, ctx, failures),
    }
}

// ============================================================================
// Containers
// ============================================================================

fn validate_array(
    value: &Value,
    schema: &Schema,
    ctx: &mut ValidationContext,
    failures: &mut ValidationFailures,
) {
    let items = match value {
        Value::List(items) => items,
        v if v.is_zero_length() => return,
        other => {
            failures.fail_with(FailureKind::ValueNotArray, ctx, other.type_name());
            return;
        }
    };

    let recorded = failures.len();
    let constraints = &schema.array;
    if let Some(max) = constraints.max_items {
        if items.len() > max {
            failures.fail_with(
                FailureKind::ArraySizeExceedsMaxItems,
                ctx,
                format!("{} > {}", items.len(), max),
            );
        }
    }
    if let Some(min) = constraints.min_items {
        if items.len() < min {
            failures.fail_with(
                FailureKind::ArraySizeExceedsMinItems,
                ctx,
                format!("{} < {}", items.len(), min),
            );
        }
    }
    if constraints.unique_items && has_duplicates(items) {
        failures.fail(FailureKind::DuplicateArrayItems, ctx);
    }
    if failures.len() > recorded {
        return;
    }

    let item_schema = match schema.items.as_deref() {
        Some(item_schema) => item_schema,
        None => return,
    };
    for (i, item) in items.iter().enumerate() {
        ctx.push_index(i);
        validate_value(item, item_schema, ctx, failures);
        ctx.pop();
    }
}

/// Hashable identity of a scalar element, equal exactly when `same_as` is
#[derive(PartialEq, Eq, Hash)]
enum ScalarKey<'a> {
    Null,
    Bool(bool),
    Int(i128),
    Float(u64),
    String(&'a str),
}

impl<'a> ScalarKey<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        Some(match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Int(n) => Self::Int(*n),
            Value::Float(f) => match integral(*f) {
                Some(n) => Self::Int(n),
                None => Self::Float(f.to_bits()),
            },
            Value::String(s) => Self::String(s),
            Value::List(_) | Value::Object(_) => return None,
        })
    }
}

fn has_duplicates(items: &[Value]) -> bool {
    let mut scalars = HashSet::with_capacity(items.len());
    let mut containers: Vec<&Value> = Vec::new();

    for item in items {
        match ScalarKey::of(item) {
            Some(key) => {
                if !scalars.insert(key) {
                    return true;
                }
            }
            None => {
                if containers.iter().any(|seen| seen.same_as(item)) {
                    return true;
                }
                containers.push(item);
            }
        }
    }
    false
}

fn validate_object(
    value: &Value,
    schema: &Schema,
    ctx: &mut ValidationContext,
    failures: &mut ValidationFailures,
) {
    if value.is_zero_length() {
        return;
    }
    if !matches!(value, Value::Object(_)) {
        failures.fail_with(FailureKind::ValueNotObject, ctx, value.type_name());
        return;
    }

    let recorded = failures.len();
    for name in &schema.required {
        if value.get(name).map_or(true, Value::is_null) {
            ctx.push(name);
            failures.fail(FailureKind::RequiredValueMissing, ctx);
            ctx.pop();
        }
    }
    if failures.len() > recorded {
        return;
    }

    for (name, property_schema) in &schema.properties {
        if let Some(property) = value.get(name) {
            ctx.push(name);
            validate_value(property, property_schema, ctx, failures);
            ctx.pop();
        }
    }
}
