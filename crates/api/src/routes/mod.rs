pub mod appointment;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /appointments                        create (POST), list by day (GET ?day=)
/// /appointments/{id}                   get (GET), edit (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/appointments", appointment::router())
}
