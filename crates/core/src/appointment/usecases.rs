//! Use-case interactors backed by an [`AppointmentRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};

use super::{
    AddAppointment, AddAppointmentParams, Appointment, AppointmentRepository, EditAppointment,
    EditAppointmentParams, LoadAppointmentById, LoadAppointmentsByDay,
};
use crate::error::CoreError;
use crate::types::{Date, DbId, Timestamp};

/// Adds an appointment unless another one is already booked under the same
/// name.
pub struct DbAddAppointment {
    repository: Arc<dyn AppointmentRepository>,
}

impl DbAddAppointment {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddAppointment for DbAddAppointment {
    async fn add(&self, params: AddAppointmentParams) -> Result<Option<Appointment>, CoreError> {
        if self.repository.load_by_name(&params.name).await?.is_some() {
            tracing::debug!(name = %params.name, "Appointment name already in use");
            return Ok(None);
        }
        let appointment = self.repository.add(&params).await?;
        Ok(Some(appointment))
    }
}

/// Applies partial updates to a stored appointment.
pub struct DbEditAppointment {
    repository: Arc<dyn AppointmentRepository>,
}

impl DbEditAppointment {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EditAppointment for DbEditAppointment {
    async fn edit(&self, params: EditAppointmentParams) -> Result<Option<Appointment>, CoreError> {
        if let Some(name) = &params.name {
            if let Some(holder) = self.repository.load_by_name(name).await? {
                if holder.id != params.id {
                    tracing::debug!(%name, holder_id = holder.id, "Appointment name already in use");
                    return Ok(None);
                }
            }
        }

        let updated = self
            .repository
            .update(&params)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Appointment",
                id: params.id,
            })?;
        Ok(Some(updated))
    }
}

pub struct DbLoadAppointmentById {
    repository: Arc<dyn AppointmentRepository>,
}

impl DbLoadAppointmentById {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadAppointmentById for DbLoadAppointmentById {
    async fn load_by_id(&self, id: DbId) -> Result<Option<Appointment>, CoreError> {
        self.repository.load_by_id(id).await
    }
}

/// Loads the appointments falling inside one UTC calendar day.
pub struct DbLoadAppointmentsByDay {
    repository: Arc<dyn AppointmentRepository>,
}

impl DbLoadAppointmentsByDay {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadAppointmentsByDay for DbLoadAppointmentsByDay {
    async fn load_by_day(&self, day: Date) -> Result<Vec<Appointment>, CoreError> {
        let (start, end) = day_window(day);
        self.repository.load_between(start, end).await
    }
}

/// Half-open `[start, end)` UTC window covering `day`.
///
/// The last representable day has no successor; its window ends at
/// [`DateTime::<Utc>::MAX_UTC`] instead.
pub fn day_window(day: Date) -> (Timestamp, Timestamp) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = day
        .succ_opt()
        .map(|next| next.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    (start, end)
}
