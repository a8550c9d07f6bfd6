use std::sync::Arc;

use crate::factories::{make_appointment_services, AppointmentServices};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: schedule_db::DbPool,
    /// Appointment controllers and read use cases.
    pub appointments: Arc<AppointmentServices>,
}

impl AppState {
    pub fn new(pool: schedule_db::DbPool) -> Self {
        let appointments = Arc::new(make_appointment_services(pool.clone()));
        Self { pool, appointments }
    }
}
