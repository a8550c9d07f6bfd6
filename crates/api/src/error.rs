use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schedule_core::error::{CoreError, ValidationError};

use crate::response::HttpResponse;

/// Error kind and message reported for every unexpected failure.
pub const SERVER_ERROR_NAME: &str = "ServerError";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for controllers and HTTP handlers.
///
/// Wraps [`CoreError`] for domain failures and adds HTTP-specific variants.
/// Every variant converts into an [`HttpResponse`] with a `{name, message}`
/// body; internal details are logged and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `schedule_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body failed validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request refers to something the caller may not act on, such as an
    /// unknown appointment id (403).
    #[error("Forbidden: {0}")]
    Forbidden(ValidationError),

    /// The appointment name is already booked (403).
    #[error("The received name is already in use")]
    NameInUse,

    /// A malformed request that never reached validation (400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message (500).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn into_http_response(self) -> HttpResponse {
        let (status, name, message) = match &self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.name(), err.to_string()),
            AppError::Forbidden(err) => (StatusCode::FORBIDDEN, err.name(), err.to_string()),
            AppError::NameInUse => (StatusCode::FORBIDDEN, "NameInUseError", self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BadRequestError", msg.clone()),

            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NotFoundError",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_NAME,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        HttpResponse::error(status, name, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_http_response().into_response()
    }
}
