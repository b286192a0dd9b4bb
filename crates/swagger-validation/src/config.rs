//! Configuration options for parameter checking

// ============================================================================
// Validation Config
// ============================================================================

/// Configuration options for [`crate::ParameterCheck`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Put the individual failures into the client-facing 400 message.
    /// Off by default so schema internals stay out of responses.
    pub expose_details: bool,

    /// Emit a `debug!` event per failure
    pub log_failures: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            expose_details: false,
            log_failures: true,
        }
    }
}

impl ValidationConfig {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose failure details to clients
    pub fn expose_details(mut self, expose: bool) -> Self {
        self.expose_details = expose;
        self
    }

    /// Enable per-failure logging
    pub fn log_failures(mut self, log: bool) -> Self {
        self.log_failures = log;
        self
    }
}
