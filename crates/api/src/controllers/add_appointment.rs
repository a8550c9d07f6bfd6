use std::sync::Arc;

use async_trait::async_trait;
use schedule_core::appointment::{AddAppointment, AddAppointmentParams, Appointment};
use schedule_core::validation::Validation;

use super::{Controller, HttpRequest};
use crate::error::{AppError, AppResult};
use crate::response::{ok, HttpResponse};

/// POST /api/v1/appointments
pub struct AddAppointmentController {
    add_appointment: Arc<dyn AddAppointment>,
    validation: Arc<dyn Validation>,
}

impl AddAppointmentController {
    pub fn new(add_appointment: Arc<dyn AddAppointment>, validation: Arc<dyn Validation>) -> Self {
        Self {
            add_appointment,
            validation,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> AppResult<Appointment> {
        if let Some(error) = self.validation.validate(&request.body).await? {
            return Err(AppError::Validation(error));
        }

        let params = AddAppointmentParams::try_from(&request.body)?;
        self.add_appointment
            .add(params)
            .await?
            .ok_or(AppError::NameInUse)
    }
}

#[async_trait]
impl Controller for AddAppointmentController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.try_handle(&request).await {
            Ok(appointment) => ok(&appointment),
            Err(err) => {
                tracing::warn!(error = %err, "Add appointment rejected");
                err.into_http_response()
            }
        }
    }
}
