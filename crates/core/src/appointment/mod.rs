//! Appointment domain model, use-case parameters and collaborator traits.
//!
//! The traits here are the seams between the HTTP controllers, the use-case
//! interactors in [`usecases`] and the persistence adapter in `schedule-db`.
//! All of them are object safe so they can be shared as `Arc<dyn Trait>`.

pub mod usecases;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::types::{Date, DbId, Timestamp};
use crate::validation::{date::parse_timestamp, field_value, ValidationInput};

pub const FIELD_NAME: &str = "name";
pub const FIELD_BIRTHDAY: &str = "birthday";
pub const FIELD_APPOINTMENT_DATE: &str = "appointment_date";
pub const FIELD_APPOINTMENT_ID: &str = "appointment_id";

/// A scheduled appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: DbId,
    pub name: String,
    pub birthday: Date,
    pub appointment_date: Timestamp,
}

/// Input for the add use case, extracted from an already validated body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppointmentParams {
    pub name: String,
    pub birthday: Date,
    pub appointment_date: Timestamp,
}

/// Input for the edit use case. `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAppointmentParams {
    pub id: DbId,
    pub name: Option<String>,
    pub birthday: Option<Date>,
    pub appointment_date: Option<Timestamp>,
}

impl TryFrom<&ValidationInput> for AddAppointmentParams {
    type Error = ValidationError;

    fn try_from(input: &ValidationInput) -> Result<Self, Self::Error> {
        let name = field_str(input, FIELD_NAME)?
            .ok_or_else(|| ValidationError::missing(FIELD_NAME))?;
        let birthday = field_timestamp(input, FIELD_BIRTHDAY)?
            .ok_or_else(|| ValidationError::missing(FIELD_BIRTHDAY))?;
        let appointment_date = field_timestamp(input, FIELD_APPOINTMENT_DATE)?
            .ok_or_else(|| ValidationError::missing(FIELD_APPOINTMENT_DATE))?;

        Ok(Self {
            name: name.to_string(),
            birthday: birthday.date_naive(),
            appointment_date,
        })
    }
}

impl EditAppointmentParams {
    /// Build edit parameters for appointment `id` from a validated body.
    pub fn from_input(id: DbId, input: &ValidationInput) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: field_str(input, FIELD_NAME)?.map(str::to_string),
            birthday: field_timestamp(input, FIELD_BIRTHDAY)?.map(|ts| ts.date_naive()),
            appointment_date: field_timestamp(input, FIELD_APPOINTMENT_DATE)?,
        })
    }
}

/// Read a string field. Absent, `null` and empty strings are `None`;
/// non-string values are invalid.
fn field_str<'a>(input: &'a ValidationInput, field: &str) -> Result<Option<&'a str>, ValidationError> {
    match field_value(input, field) {
        None => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ValidationError::invalid(field)),
    }
}

fn field_timestamp(
    input: &ValidationInput,
    field: &str,
) -> Result<Option<Timestamp>, ValidationError> {
    field_str(input, field)?
        .map(|raw| parse_timestamp(raw).ok_or_else(|| ValidationError::invalid(field)))
        .transpose()
}

// ---------------------------------------------------------------------------
// Use-case traits (consumed by controllers and validators)
// ---------------------------------------------------------------------------

/// Creates an appointment. `Ok(None)` means the name is already scheduled.
#[async_trait]
pub trait AddAppointment: Send + Sync {
    async fn add(&self, params: AddAppointmentParams) -> Result<Option<Appointment>, CoreError>;
}

/// Updates an appointment. `Ok(None)` means the new name belongs to another
/// appointment.
#[async_trait]
pub trait EditAppointment: Send + Sync {
    async fn edit(&self, params: EditAppointmentParams) -> Result<Option<Appointment>, CoreError>;
}

#[async_trait]
pub trait LoadAppointmentById: Send + Sync {
    async fn load_by_id(&self, id: DbId) -> Result<Option<Appointment>, CoreError>;
}

/// Returns every appointment scheduled on the given UTC calendar day.
#[async_trait]
pub trait LoadAppointmentsByDay: Send + Sync {
    async fn load_by_day(&self, day: Date) -> Result<Vec<Appointment>, CoreError>;
}

// ---------------------------------------------------------------------------
// Persistence port
// ---------------------------------------------------------------------------

/// Storage operations needed by the appointment use cases.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn add(&self, params: &AddAppointmentParams) -> Result<Appointment, CoreError>;

    /// Apply the non-`None` fields of `params`. `Ok(None)` if no row has
    /// `params.id`.
    async fn update(&self, params: &EditAppointmentParams)
        -> Result<Option<Appointment>, CoreError>;

    async fn load_by_name(&self, name: &str) -> Result<Option<Appointment>, CoreError>;

    async fn load_by_id(&self, id: DbId) -> Result<Option<Appointment>, CoreError>;

    /// Appointments with `start <= appointment_date < end`, earliest first.
    async fn load_between(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Appointment>, CoreError>;
}
