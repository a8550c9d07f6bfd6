//! Repository for the `appointments` table.

use schedule_core::appointment::{AddAppointmentParams, EditAppointmentParams};
use schedule_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::appointment::AppointmentRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birthday, appointment_date, created_at, updated_at";

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &AddAppointmentParams,
    ) -> Result<AppointmentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments (name, birthday, appointment_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppointmentRow>(&query)
            .bind(&input.name)
            .bind(input.birthday)
            .bind(input.appointment_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AppointmentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        sqlx::query_as::<_, AppointmentRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the oldest appointment booked under `name`.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<AppointmentRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments WHERE name = $1 ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, AppointmentRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List appointments with `start <= appointment_date < end`, earliest first.
    pub async fn list_between(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<AppointmentRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments
             WHERE appointment_date >= $1 AND appointment_date < $2
             ORDER BY appointment_date ASC, id ASC"
        );
        sqlx::query_as::<_, AppointmentRow>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Update an appointment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with `input.id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &EditAppointmentParams,
    ) -> Result<Option<AppointmentRow>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET
                name = COALESCE($2, name),
                birthday = COALESCE($3, birthday),
                appointment_date = COALESCE($4, appointment_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppointmentRow>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.birthday)
            .bind(input.appointment_date)
            .fetch_optional(pool)
            .await
    }
}
