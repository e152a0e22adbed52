//! Validation policy configuration

/// Policy applied by [`TaskValidationLayer`](crate::layer::TaskValidationLayer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Reject send operations whose message has no parts
    pub require_message_parts: bool,

    /// Upper bound on the `historyLength` a caller may request
    pub max_history_length: Option<u32>,

    /// Check tasks returned by the inner service
    pub validate_responses: bool,
}

impl ValidationConfig {
    /// Create the default validation policy
    pub fn new() -> Self {
        Self {
            require_message_parts: true,
            max_history_length: None,
            validate_responses: true,
        }
    }

    /// Allow or reject messages without parts
    pub fn with_require_message_parts(mut self, required: bool) -> Self {
        self.require_message_parts = required;
        self
    }

    /// Set the largest accepted `historyLength`
    pub fn with_max_history_length(mut self, max: u32) -> Self {
        self.max_history_length = Some(max);
        self
    }

    /// Enable or disable response validation
    pub fn with_response_validation(mut self, enabled: bool) -> Self {
        self.validate_responses = enabled;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}
