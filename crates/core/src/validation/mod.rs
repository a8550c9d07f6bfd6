//! Appointment validation pipeline.
//!
//! Every check implements [`Validation`]: it inspects the raw request body
//! and either passes (`Ok(None)`) or reports exactly one
//! [`ValidationError`]. Checks are chained with a [`ValidationComposite`],
//! which stops at the first failure. Collaborator failures (for example the
//! day lookup hitting the database) surface as `Err(CoreError)` and are never
//! turned into validation errors.

pub mod appointment;
pub mod composite;
pub mod date;
pub mod day;
pub mod required_field;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{CoreError, ValidationError};

pub use appointment::{add_appointment_validation, edit_appointment_validation};
pub use composite::ValidationComposite;
pub use date::{ChronoDateValidator, DateValidation, DateValidator};
pub use day::{DayValidation, MAX_APPOINTMENTS_PER_DAY};
pub use required_field::RequiredFieldValidation;

/// The record being validated: a JSON object keyed by field name.
pub type ValidationInput = serde_json::Map<String, Value>;

/// `Ok(None)` when the check passes, `Ok(Some(_))` on a validation failure.
pub type ValidationOutcome = Result<Option<ValidationError>, CoreError>;

#[async_trait]
pub trait Validation: Send + Sync {
    async fn validate(&self, input: &ValidationInput) -> ValidationOutcome;
}

/// Look up `field`, treating an explicit `null` the same as an absent key.
pub fn field_value<'a>(input: &'a ValidationInput, field: &str) -> Option<&'a Value> {
    input.get(field).filter(|value| !value.is_null())
}
