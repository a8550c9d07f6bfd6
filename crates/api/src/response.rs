//! Transport-neutral response type returned by controllers.
//!
//! Controllers never return `Result`: every outcome, including failures, is
//! an [`HttpResponse`] carrying a status code and a JSON body. Error bodies
//! always have the shape `{ "name": <error kind>, "message": <text> }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: Value,
}

impl HttpResponse {
    pub fn new(status_code: StatusCode, body: Value) -> Self {
        Self { status_code, body }
    }

    /// Build an error response with the standard `{name, message}` body.
    pub fn error(status_code: StatusCode, name: &str, message: impl Into<String>) -> Self {
        Self::new(
            status_code,
            json!({ "name": name, "message": message.into() }),
        )
    }
}

/// 200 with `data` serialized as the body.
///
/// Serialization failures are reported as a 500 like any other failure.
pub fn ok<T: Serialize>(data: &T) -> HttpResponse {
    match serde_json::to_value(data) {
        Ok(body) => HttpResponse::new(StatusCode::OK, body),
        Err(err) => AppError::InternalError(format!("Response serialization failed: {err}"))
            .into_http_response(),
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, axum::Json(self.body)).into_response()
    }
}
