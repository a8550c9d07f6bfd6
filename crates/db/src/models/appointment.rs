//! Appointment row model.

use schedule_core::appointment::Appointment;
use schedule_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `appointments` table.
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentRow {
    pub id: DbId,
    pub name: String,
    pub birthday: Date,
    pub appointment_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            birthday: row.birthday,
            appointment_date: row.appointment_date,
        }
    }
}
