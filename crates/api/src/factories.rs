//! Composition root: wires repositories, use cases, validation chains and
//! controllers together.

use std::sync::Arc;

use schedule_core::appointment::usecases::{
    DbAddAppointment, DbEditAppointment, DbLoadAppointmentById, DbLoadAppointmentsByDay,
};
use schedule_core::appointment::{AppointmentRepository, LoadAppointmentById, LoadAppointmentsByDay};
use schedule_core::validation::{add_appointment_validation, edit_appointment_validation};
use schedule_db::{DbPool, PgAppointmentStore};

use crate::controllers::{AddAppointmentController, Controller, EditAppointmentController};

/// Everything the appointment routes need, built once at startup and shared
/// across requests.
#[derive(Clone)]
pub struct AppointmentServices {
    pub add_controller: Arc<dyn Controller>,
    pub edit_controller: Arc<dyn Controller>,
    pub load_by_id: Arc<dyn LoadAppointmentById>,
    pub load_by_day: Arc<dyn LoadAppointmentsByDay>,
}

impl AppointmentServices {
    pub fn from_repository(repository: Arc<dyn AppointmentRepository>) -> Self {
        let load_by_day: Arc<dyn LoadAppointmentsByDay> =
            Arc::new(DbLoadAppointmentsByDay::new(Arc::clone(&repository)));
        let load_by_id: Arc<dyn LoadAppointmentById> =
            Arc::new(DbLoadAppointmentById::new(Arc::clone(&repository)));

        let add_controller = AddAppointmentController::new(
            Arc::new(DbAddAppointment::new(Arc::clone(&repository))),
            Arc::new(add_appointment_validation(Arc::clone(&load_by_day))),
        );
        let edit_controller = EditAppointmentController::new(
            Arc::new(DbEditAppointment::new(repository)),
            Arc::clone(&load_by_id),
            Arc::new(edit_appointment_validation(Arc::clone(&load_by_day))),
        );

        Self {
            add_controller: Arc::new(add_controller),
            edit_controller: Arc::new(edit_controller),
            load_by_id,
            load_by_day,
        }
    }
}

/// Build the appointment services on top of the Postgres store.
pub fn make_appointment_services(pool: DbPool) -> AppointmentServices {
    AppointmentServices::from_repository(Arc::new(PgAppointmentStore::new(pool)))
}
