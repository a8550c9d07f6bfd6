use async_trait::async_trait;

use super::{Validation, ValidationInput, ValidationOutcome};

/// Runs validations in order and stops at the first one that fails.
///
/// Errors are never merged: callers always get at most one
/// [`crate::error::ValidationError`], the one from the earliest failing
/// validation.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }

    pub fn len(&self) -> usize {
        self.validations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validations.is_empty()
    }
}

#[async_trait]
impl Validation for ValidationComposite {
    async fn validate(&self, input: &ValidationInput) -> ValidationOutcome {
        for validation in &self.validations {
            if let Some(error) = validation.validate(input).await? {
                return Ok(Some(error));
            }
        }
        Ok(None)
    }
}
