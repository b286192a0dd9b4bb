//! Format validation for Swagger string formats
//!
//! Pre-compiled regex validators for `byte`, `date` and `date-time`, plus
//! the character check for `binary`.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Pre-compiled Regex Patterns
// ============================================================================

/// Base64 alphabet with optional padding
static BYTE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").unwrap());

/// Date regex pattern (YYYY-MM-DD)
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// ISO 8601 extended date-time
static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?([zZ]|[+-]\d{2}:\d{2})$").unwrap()
});

// ============================================================================
// Format Validators
// ============================================================================

/// Validate `byte` format (base64 characters)
///
/// # Example
/// ```
/// use swagger_validation::formats::validate_byte;
///
/// assert!(validate_byte("aGVsbG8="));
/// assert!(!validate_byte("not base64!"));
/// ```
pub fn validate_byte(value: &str) -> bool {
    BYTE_REGEX.is_match(value)
}

/// Validate `binary` format: only `0`/`1`, in whole octets
///
/// # Example
/// ```
/// use swagger_validation::formats::validate_binary;
///
/// assert!(validate_binary("01100001"));
/// assert!(!validate_binary("0110"));
/// ```
pub fn validate_binary(value: &str) -> bool {
    value.len() % 8 == 0 && value.bytes().all(|b| b == b'0' || b == b'1')
}

/// Validate date format (YYYY-MM-DD)
pub fn validate_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

/// Validate ISO 8601 date-time format
///
/// # Example
/// ```
/// use swagger_validation::formats::validate_datetime;
///
/// assert!(validate_datetime("2024-01-19T12:00:00Z"));
/// assert!(validate_datetime("2024-01-19T12:00:00.123+08:00"));
/// assert!(!validate_datetime("2024-01-19 12:00:00"));
/// ```
pub fn validate_datetime(value: &str) -> bool {
    DATETIME_REGEX.is_match(value)
}
