//! Scalar validators for `boolean`, `integer`, `number` and `string`
//!
//! Each validator checks one value against one schema and appends what it
//! finds to `failures`. None of them short-circuits after the type check, so
//! a value violating both `maximum` and `exclusiveMaximum` yields two
//! failures. Zero-length values are filtered out by the caller.

use crate::constraints::{NumericConstraints, StringConstraints};
use crate::errors::{FailureKind, ValidationContext, ValidationFailures, ValidationResult};
use crate::formats;
use crate::schema::Schema;
use crate::types::{integral, Format, ParameterType, Value};
use std::cmp::Ordering;
use std::fmt;

/// Check a scalar value on its own, outside a parameter walk
///
/// # Example
///
/// ```
/// use swagger_validation::{Schema, Value};
/// use swagger_validation::scalars::check;
///
/// let schema = Schema::integer().format("int32");
/// assert!(check(&Value::Int(2_147_483_647), &schema).is_ok());
/// assert!(check(&Value::Int(2_147_483_648), &schema).is_err());
/// ```
pub fn check(value: &Value, schema: &Schema) -> ValidationResult<()> {
    let ctx = ValidationContext::new();
    let mut failures = ValidationFailures::new();
    if !value.is_zero_length() {
        check_scalar(value, schema, &ctx, &mut failures);
    }
    failures.into_result()
}

/// Dispatch on the declared scalar type; anything else passes
pub(crate) fn check_scalar(
    value: &Value,
    schema: &Schema,
    ctx: &ValidationContext,
    failures: &mut ValidationFailures,
) {
    match schema.param_type.as_ref() {
        Some(ParameterType::Boolean) => check_boolean(value, ctx, failures),
        Some(ParameterType::Integer) => check_integer(value, schema, ctx, failures),
        Some(ParameterType::Number) => check_number(value, schema, ctx, failures),
        Some(ParameterType::String) => check_string(value, schema, ctx, failures),
        _ => {}
    }
}

// ============================================================================
// Boolean
// ============================================================================

/// Booleans travel as the strings `"true"` and `"false"`
pub fn check_boolean(value: &Value, ctx: &ValidationContext, failures: &mut ValidationFailures) {
    match value {
        Value::String(s) if s == "true" || s == "false" => {}
        other => failures.fail_with(FailureKind::ValueNotBoolean, ctx, other.type_name()),
    }
}

// ============================================================================
// Integer
// ============================================================================

pub fn check_integer(
    value: &Value,
    schema: &Schema,
    ctx: &ValidationContext,
    failures: &mut ValidationFailures,
) {
    let n = match value {
        Value::Int(n) => *n,
        other => {
            failures.fail_with(FailureKind::ValueNotInteger, ctx, other.type_name());
            return;
        }
    };

    match schema.format {
        Some(Format::Int32) if n < i128::from(i32::MIN) || n > i128::from(i32::MAX) => {
            failures.fail_with(FailureKind::ValueExceedsInt32Bounds, ctx, n);
        }
        Some(Format::Int64) if n < i128::from(i64::MIN) || n > i128::from(i64::MAX) => {
            failures.fail_with(FailureKind::ValueExceedsInt64Bounds, ctx, n);
        }
        _ => {}
    }

    check_range(n, |bound| compare_int(n, bound), &schema.numeric, ctx, failures);
}

/// Integral bounds compare exactly; fractional ones go through `f64`
fn compare_int(n: i128, bound: f64) -> Option<Ordering> {
    match integral(bound) {
        Some(bound) => Some(n.cmp(&bound)),
        None => (n as f64).partial_cmp(&bound),
    }
}

// ============================================================================
// Number
// ============================================================================

pub fn check_number(
    value: &Value,
    schema: &Schema,
    ctx: &ValidationContext,
    failures: &mut ValidationFailures,
) {
    match value {
        Value::Int(n) => {
            let n = *n;
            check_range(n, |bound| compare_int(n, bound), &schema.numeric, ctx, failures);
        }
        Value::Float(n) => {
            let n = *n;
            check_range(n, |bound| n.partial_cmp(&bound), &schema.numeric, ctx, failures);
        }
        other => failures.fail_with(FailureKind::ValueNotNumber, ctx, other.type_name()),
    }
}

/// The four range checks; `compare` orders the value against a bound
fn check_range<N: fmt::Display>(
    n: N,
    compare: impl Fn(f64) -> Option<Ordering>,
    constraints: &NumericConstraints,
    ctx: &ValidationContext,
    failures: &mut ValidationFailures,
) {
    if let Some(max) = constraints.maximum {
        if compare(max) == Some(Ordering::Greater) {
            failures.fail_with(FailureKind::ValueExceedsMaximum, ctx, format!("{} > {}", n, max));
        }
    }
    if let Some(max) = constraints.exclusive_maximum {
        if matches!(compare(max), Some(Ordering::Greater | Ordering::Equal)) {
            failures.fail_with(
                FailureKind::ValueExceedsExclusiveMaximum,
                ctx,
                format!("{} >= {}", n, max),
            );
        }
    }
    if let Some(min) = constraints.minimum {
        if compare(min) == Some(Ordering::Less) {
            failures.fail_with(FailureKind::ValueExceedsMinimum, ctx, format!("{} < {}", n, min));
        }
    }
    if let Some(min) = constraints.exclusive_minimum {
        if matches!(compare(min), Some(Ordering::Less | Ordering::Equal)) {
            failures.fail_with(
                FailureKind::ValueExceedsExclusiveMinimum,
                ctx,
                format!("{} <= {}", n, min),
            );
        }
    }
}

// ============================================================================
// String
// ============================================================================

pub fn check_string(
    value: &Value,
    schema: &Schema,
    ctx: &ValidationContext,
    failures: &mut ValidationFailures,
) {
    let s = match value {
        Value::String(s) => s.as_str(),
        other => {
            failures.fail_with(FailureKind::ValueNotString, ctx, other.type_name());
            return;
        }
    };

    let format_failure = match schema.format {
        Some(Format::Byte) if !formats::validate_byte(s) => Some(FailureKind::ValueNotByte),
        Some(Format::Binary) if !formats::validate_binary(s) => Some(FailureKind::ValueNotBinary),
        Some(Format::Date) if !formats::validate_date(s) => Some(FailureKind::ValueNotDate),
        Some(Format::DateTime) if !formats::validate_datetime(s) => {
            Some(FailureKind::ValueNotDatetime)
        }
        _ => None,
    };
    if let Some(kind) = format_failure {
        failures.fail(kind, ctx);
    }

    check_string_constraints(s, &schema.string, ctx, failures);
}

fn check_string_constraints(
    s: &str,
    constraints: &StringConstraints,
    ctx: &ValidationContext,
    failures: &mut ValidationFailures,
) {
    let len = s.chars().count();

    if let Some(max) = constraints.max_length {
        if len > max {
            failures.fail_with(FailureKind::ValueExceedsMaxLength, ctx, format!("{} > {}", len, max));
        }
    }
    if let Some(min) = constraints.min_length {
        if len < min {
            failures.fail_with(FailureKind::ValueExceedsMinLength, ctx, format!("{} < {}", len, min));
        }
    }
    if let Some(pattern) = &constraints.pattern {
        if !pattern.is_match(s) {
            failures.fail_with(FailureKind::ValueDoesNotMatchPattern, ctx, pattern.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Pattern;

    fn kinds(value: impl Into<Value>, schema: &Schema) -> Vec<FailureKind> {
        match check(&value.into(), schema) {
            Ok(()) => Vec::new(),
            Err(failures) => failures.kinds(),
        }
    }

    #[test]
    fn test_boolean_accepts_only_strings() {
        let schema = Schema::boolean();
        assert!(kinds("true", &schema).is_empty());
        assert!(kinds("false", &schema).is_empty());
        assert_eq!(kinds("TRUE", &schema), vec![FailureKind::ValueNotBoolean]);
        assert_eq!(kinds("1", &schema), vec![FailureKind::ValueNotBoolean]);
        assert_eq!(kinds(true, &schema), vec![FailureKind::ValueNotBoolean]);
    }

    #[test]
    fn test_integer_type() {
        let schema = Schema::integer();
        assert!(kinds(42, &schema).is_empty());
        assert!(kinds(0, &schema).is_empty());
        assert_eq!(kinds("42", &schema), vec![FailureKind::ValueNotInteger]);
        assert_eq!(kinds(4.2, &schema), vec![FailureKind::ValueNotInteger]);
    }

    #[test]
    fn test_int32_bounds() {
        let schema = Schema::integer().format("int32");
        assert!(kinds(2_147_483_647i64, &schema).is_empty());
        assert!(kinds(-2_147_483_648i64, &schema).is_empty());
        assert_eq!(kinds(2_147_483_648i64, &schema), vec![FailureKind::ValueExceedsInt32Bounds]);
        assert_eq!(kinds(-2_147_483_649i64, &schema), vec![FailureKind::ValueExceedsInt32Bounds]);
    }

    #[test]
    fn test_int64_bounds() {
        let schema = Schema::integer().format("int64");
        assert!(kinds(i64::MAX, &schema).is_empty());
        assert!(kinds(i64::MIN, &schema).is_empty());
        assert_eq!(kinds(u64::MAX, &schema), vec![FailureKind::ValueExceedsInt64Bounds]);
    }

    #[test]
    fn test_no_format_no_bounds() {
        assert!(kinds(u64::MAX, &Schema::integer()).is_empty());
    }

    #[test]
    fn test_integer_range() {
        let schema = Schema::integer().minimum(1.0).maximum(10.0);
        assert!(kinds(1, &schema).is_empty());
        assert!(kinds(10, &schema).is_empty());
        assert_eq!(kinds(11, &schema), vec![FailureKind::ValueExceedsMaximum]);
        assert_eq!(kinds(0, &schema), vec![FailureKind::ValueExceedsMinimum]);
    }

    #[test]
    fn test_integer_range_exact_beyond_f64_precision() {
        let max = Schema::integer().maximum(9_007_199_254_740_992.0);
        assert!(kinds(9_007_199_254_740_992i64, &max).is_empty());
        assert_eq!(kinds(9_007_199_254_740_993i64, &max), vec![FailureKind::ValueExceedsMaximum]);

        let min = Schema::integer().format("int64").minimum(-9_007_199_254_740_992.0);
        assert_eq!(kinds(-9_007_199_254_740_993i64, &min), vec![FailureKind::ValueExceedsMinimum]);

        let exclusive = Schema::number().exclusive_maximum(9_007_199_254_740_992.0);
        assert!(kinds(9_007_199_254_740_991i64, &exclusive).is_empty());
        assert_eq!(
            kinds(9_007_199_254_740_993i64, &exclusive),
            vec![FailureKind::ValueExceedsExclusiveMaximum]
        );
    }

    #[test]
    fn test_integer_against_fractional_bound() {
        let schema = Schema::integer().maximum(10.5).exclusive_minimum(-0.5);
        assert!(kinds(10, &schema).is_empty());
        assert!(kinds(0, &schema).is_empty());
        assert_eq!(kinds(11, &schema), vec![FailureKind::ValueExceedsMaximum]);
        assert_eq!(kinds(-1, &schema), vec![FailureKind::ValueExceedsExclusiveMinimum]);
    }

    #[test]
    fn test_number_range_reports_every_violation() {
        let schema = Schema::number().maximum(5.0).exclusive_maximum(5.0);
        assert_eq!(
            kinds(6.5, &schema),
            vec![FailureKind::ValueExceedsMaximum, FailureKind::ValueExceedsExclusiveMaximum]
        );
        assert_eq!(kinds(5.0, &schema), vec![FailureKind::ValueExceedsExclusiveMaximum]);
        assert!(kinds(4.99, &schema).is_empty());
    }

    #[test]
    fn test_number_exclusive_minimum() {
        let schema = Schema::number().exclusive_minimum(0.0);
        assert_eq!(kinds(0, &schema), vec![FailureKind::ValueExceedsExclusiveMinimum]);
        assert!(kinds(0.1, &schema).is_empty());
        assert_eq!(kinds("1.5", &schema), vec![FailureKind::ValueNotNumber]);
    }

    #[test]
    fn test_string_type() {
        assert!(kinds("hello", &Schema::string()).is_empty());
        assert_eq!(kinds(5, &Schema::string()), vec![FailureKind::ValueNotString]);
    }

    #[test]
    fn test_string_formats() {
        assert_eq!(kinds("YQ===", &Schema::string().format("byte")), vec![FailureKind::ValueNotByte]);
        assert_eq!(kinds("0101", &Schema::string().format("binary")), vec![FailureKind::ValueNotBinary]);
        assert_eq!(kinds("2024/01/01", &Schema::string().format("date")), vec![FailureKind::ValueNotDate]);
        assert_eq!(
            kinds("2024-01-01", &Schema::string().format("date-time")),
            vec![FailureKind::ValueNotDatetime]
        );
        assert!(kinds("2024-01-01T10:00:00Z", &Schema::string().format("datetime")).is_empty());
        assert!(kinds("hunter2", &Schema::string().format("password")).is_empty());
    }

    #[test]
    fn test_string_length_counts_characters() {
        let schema = Schema::string().max_length(3);
        assert!(kinds("héé", &schema).is_empty());
        assert_eq!(kinds("abcd", &schema), vec![FailureKind::ValueExceedsMaxLength]);
        assert_eq!(kinds("a", &Schema::string().min_length(2)), vec![FailureKind::ValueExceedsMinLength]);
    }

    #[test]
    fn test_string_reports_format_length_and_pattern() {
        let schema = Schema::string()
            .format("date")
            .max_length(4)
            .pattern(Pattern::new("^[0-9]+$").unwrap());
        assert_eq!(
            kinds("not-a-date", &schema),
            vec![
                FailureKind::ValueNotDate,
                FailureKind::ValueExceedsMaxLength,
                FailureKind::ValueDoesNotMatchPattern,
            ]
        );
    }

    #[test]
    fn test_zero_length_bypasses_checks() {
        let schema = Schema::string().min_length(5).format("date");
        assert!(kinds("", &schema).is_empty());
        assert!(kinds(Value::Null, &Schema::integer().minimum(3.0)).is_empty());
        assert!(kinds("", &Schema::boolean()).is_empty());
    }

    #[test]
    fn test_unknown_type_passes() {
        let schema = Schema::new(ParameterType::Other("file".to_string()));
        assert!(kinds(123, &schema).is_empty());
        assert!(kinds("x", &Schema::default()).is_empty());
    }

    #[test]
    fn test_failure_path_and_message() {
        let mut ctx = ValidationContext::for_parameter("query", "limit");
        ctx.push("inner");
        let mut failures = ValidationFailures::new();
        check_integer(&Value::Int(20), &Schema::integer().maximum(10.0), &ctx, &mut failures);

        let failure = &failures.as_slice()[0];
        assert_eq!(failure.path, "query.limit.inner");
        assert!(failure.message.starts_with("Value exceeds maximum"));
    }
}
