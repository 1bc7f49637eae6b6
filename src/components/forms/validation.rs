//! Form validation utilities
//!
//! Provides the validation rule used by the ticker field. Tickers carry no
//! format requirements, so the only rule is the trim/empty check.

/// Validation result
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }
}

/// Validation rule trait
pub trait ValidationRule<T>: Send + Sync {
    fn validate(&self, value: &T) -> ValidationResult;
    fn description(&self) -> &str;
}

/// Required field validator
pub struct Required {
    message: String,
}

impl Required {
    pub fn new() -> Self {
        Self {
            message: "This field is required".to_string(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<String> for Required {
    fn validate(&self, value: &String) -> ValidationResult {
        if value.trim().is_empty() {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }

    fn description(&self) -> &str {
        "Required field"
    }
}
