use std::sync::Arc;

use async_trait::async_trait;
use schedule_core::appointment::{
    Appointment, EditAppointment, EditAppointmentParams, LoadAppointmentById,
    FIELD_APPOINTMENT_ID,
};
use schedule_core::error::ValidationError;
use schedule_core::types::DbId;
use schedule_core::validation::Validation;

use super::{Controller, HttpRequest};
use crate::error::{AppError, AppResult};
use crate::response::{ok, HttpResponse};

/// PUT /api/v1/appointments/{appointment_id}
///
/// The body is validated first; only then is the `appointment_id` path
/// parameter resolved. An id that is malformed or unknown is rejected with
/// 403 rather than 404.
pub struct EditAppointmentController {
    edit_appointment: Arc<dyn EditAppointment>,
    load_appointment_by_id: Arc<dyn LoadAppointmentById>,
    validation: Arc<dyn Validation>,
}

impl EditAppointmentController {
    pub fn new(
        edit_appointment: Arc<dyn EditAppointment>,
        load_appointment_by_id: Arc<dyn LoadAppointmentById>,
        validation: Arc<dyn Validation>,
    ) -> Self {
        Self {
            edit_appointment,
            load_appointment_by_id,
            validation,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> AppResult<Appointment> {
        if let Some(error) = self.validation.validate(&request.body).await? {
            return Err(AppError::Validation(error));
        }

        let id = self.resolve_id(request).await?;
        let params = EditAppointmentParams::from_input(id, &request.body)?;
        self.edit_appointment
            .edit(params)
            .await?
            .ok_or(AppError::NameInUse)
    }

    /// Parse the path id and confirm the appointment exists.
    async fn resolve_id(&self, request: &HttpRequest) -> AppResult<DbId> {
        let unknown_id = || AppError::Forbidden(ValidationError::invalid(FIELD_APPOINTMENT_ID));

        let id = request
            .param(FIELD_APPOINTMENT_ID)
            .and_then(|raw| raw.parse::<DbId>().ok())
            .ok_or_else(unknown_id)?;

        match self.load_appointment_by_id.load_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(unknown_id()),
        }
    }
}

#[async_trait]
impl Controller for EditAppointmentController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.try_handle(&request).await {
            Ok(appointment) => ok(&appointment),
            Err(err) => {
                tracing::warn!(error = %err, "Edit appointment rejected");
                err.into_http_response()
            }
        }
    }
}
