//! Route definitions for the `/appointments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::appointment;
use crate::state::AppState;

/// Routes mounted at `/appointments`.
///
/// ```text
/// GET    /?day=YYYY-MM-DD    -> list_by_day
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(appointment::list_by_day).post(appointment::create))
        .route("/{id}", get(appointment::get_by_id).put(appointment::update))
}
