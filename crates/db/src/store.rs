//! [`AppointmentRepository`] implementation over the Postgres pool.

use async_trait::async_trait;
use schedule_core::appointment::{
    AddAppointmentParams, Appointment, AppointmentRepository, EditAppointmentParams,
};
use schedule_core::error::CoreError;
use schedule_core::types::{DbId, Timestamp};

use crate::repositories::AppointmentRepo;
use crate::DbPool;

/// Adapts [`AppointmentRepo`] to the core persistence port.
#[derive(Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Database error: {err}"))
}

#[async_trait]
impl AppointmentRepository for PgAppointmentStore {
    async fn add(&self, params: &AddAppointmentParams) -> Result<Appointment, CoreError> {
        let row = AppointmentRepo::create(&self.pool, params)
            .await
            .map_err(storage_error)?;
        tracing::info!(id = row.id, day = %row.appointment_date.date_naive(), "Appointment created");
        Ok(row.into())
    }

    async fn update(
        &self,
        params: &EditAppointmentParams,
    ) -> Result<Option<Appointment>, CoreError> {
        let row = AppointmentRepo::update(&self.pool, params)
            .await
            .map_err(storage_error)?;
        if let Some(row) = &row {
            tracing::info!(id = row.id, "Appointment updated");
        }
        Ok(row.map(Appointment::from))
    }

    async fn load_by_name(&self, name: &str) -> Result<Option<Appointment>, CoreError> {
        AppointmentRepo::find_by_name(&self.pool, name)
            .await
            .map(|row| row.map(Appointment::from))
            .map_err(storage_error)
    }

    async fn load_by_id(&self, id: DbId) -> Result<Option<Appointment>, CoreError> {
        AppointmentRepo::find_by_id(&self.pool, id)
            .await
            .map(|row| row.map(Appointment::from))
            .map_err(storage_error)
    }

    async fn load_between(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Appointment>, CoreError> {
        AppointmentRepo::list_between(&self.pool, start, end)
            .await
            .map(|rows| rows.into_iter().map(Appointment::from).collect())
            .map_err(storage_error)
    }
}
