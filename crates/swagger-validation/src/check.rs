//! Request-level aggregation
//!
//! [`ParameterCheck`] runs the parameter validator over every parameter of a
//! request and turns the combined failures into one [`BadParameters`] error.

use crate::config::ValidationConfig;
use crate::errors::{BadParameters, ValidationFailures};
use crate::schema::ParameterDescriptor;
use crate::validators;
use tracing::debug;

/// Validates all parameters of a request
#[derive(Debug, Clone, Default)]
pub struct ParameterCheck {
    config: ValidationConfig,
}

impl ParameterCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate every parameter and collect all failures
    ///
    /// Parameters are independent: a failing parameter never stops the
    /// others from being checked.
    pub fn validate(&self, params: &[ParameterDescriptor]) -> ValidationFailures {
        let mut failures = ValidationFailures::new();
        for param in params {
            validators::validate_parameter(param, &mut failures);
        }
        failures
    }

    /// Check the parameters of one request
    ///
    /// # Example
    ///
    /// ```
    /// use swagger_validation::{ParameterCheck, ParameterDescriptor, Schema};
    /// use swagger_validation_common::HttpError;
    ///
    /// let params = vec![
    ///     ParameterDescriptor::query("page", Schema::integer()).value(2),
    ///     ParameterDescriptor::header("X-Flag", Schema::boolean()).value("yes"),
    /// ];
    /// let err = ParameterCheck::new().check_params(&params).unwrap_err();
    /// assert_eq!(err.failures().len(), 1);
    ///
    /// let http: HttpError = err.into();
    /// assert_eq!(http.status_code(), 400);
    /// ```
    pub fn check_params(&self, params: &[ParameterDescriptor]) -> Result<(), BadParameters> {
        let failures = self.validate(params);
        if failures.is_empty() {
            return Ok(());
        }

        if self.config.log_failures {
            for failure in &failures {
                debug!(
                    path = %failure.path,
                    kind = failure.kind.code(),
                    "{}", failure.message
                );
            }
        }
        debug!(
            failures = failures.len(),
            parameters = params.len(),
            "Bad parameters passed in request"
        );

        Err(BadParameters::new(failures).exposing_details(self.config.expose_details))
    }
}

/// Check request parameters with the default configuration
pub fn check_params(params: &[ParameterDescriptor]) -> Result<(), BadParameters> {
    ParameterCheck::new().check_params(params)
}
