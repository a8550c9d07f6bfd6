use async_trait::async_trait;
use serde_json::Value;

use super::{field_value, Validation, ValidationInput, ValidationOutcome};
use crate::error::ValidationError;

/// Fails with `MissingParam` when the field is absent, `null` or an empty
/// string.
#[derive(Debug, Clone)]
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    fn check(&self, input: &ValidationInput) -> Option<ValidationError> {
        match field_value(input, &self.field) {
            None => Some(ValidationError::missing(&self.field)),
            Some(Value::String(s)) if s.is_empty() => Some(ValidationError::missing(&self.field)),
            Some(_) => None,
        }
    }
}

#[async_trait]
impl Validation for RequiredFieldValidation {
    async fn validate(&self, input: &ValidationInput) -> ValidationOutcome {
        Ok(self.check(input))
    }
}
