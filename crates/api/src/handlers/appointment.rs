//! Handlers for the `/appointments` resource.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use schedule_core::appointment::{Appointment, FIELD_APPOINTMENT_ID};
use schedule_core::error::{CoreError, ValidationError};
use schedule_core::types::{Date, DbId};
use schedule_core::validation::ValidationInput;
use serde::Deserialize;

use crate::controllers::HttpRequest;
use crate::error::{AppError, AppResult};
use crate::response::HttpResponse;
use crate::state::AppState;

/// Unwrap a JSON object body, reporting malformed JSON as a 400.
fn request_body(body: Result<Json<ValidationInput>, JsonRejection>) -> AppResult<ValidationInput> {
    body.map(|Json(input)| input)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// POST /api/v1/appointments
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ValidationInput>, JsonRejection>,
) -> HttpResponse {
    match request_body(body) {
        Ok(input) => state.appointments.add_controller.handle(HttpRequest::new(input)).await,
        Err(err) => err.into_http_response(),
    }
}

/// PUT /api/v1/appointments/{appointment_id}
///
/// The id is passed through as text so the controller can reject malformed
/// ids the same way as unknown ones.
pub async fn update(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    body: Result<Json<ValidationInput>, JsonRejection>,
) -> HttpResponse {
    match request_body(body) {
        Ok(input) => {
            let request = HttpRequest::new(input).with_param(FIELD_APPOINTMENT_ID, appointment_id);
            state.appointments.edit_controller.handle(request).await
        }
        Err(err) => err.into_http_response(),
    }
}

/// GET /api/v1/appointments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Appointment>> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let appointment = state
        .appointments
        .load_by_id
        .load_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(appointment))
}

/// Query parameters for listing appointments.
#[derive(Debug, Deserialize)]
pub struct ListByDayParams {
    pub day: Option<String>,
}

/// GET /api/v1/appointments?day=YYYY-MM-DD
pub async fn list_by_day(
    State(state): State<AppState>,
    params: Result<Query<ListByDayParams>, QueryRejection>,
) -> AppResult<Json<Vec<Appointment>>> {
    let Query(params) =
        params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let raw = params.day.ok_or_else(|| ValidationError::missing("day"))?;
    let day = raw
        .parse::<Date>()
        .map_err(|_| ValidationError::invalid("day"))?;

    let appointments = state.appointments.load_by_day.load_by_day(day).await?;
    Ok(Json(appointments))
}
