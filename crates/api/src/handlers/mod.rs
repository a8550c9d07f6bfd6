//! Axum request handlers.
//!
//! Write endpoints extract the raw request into an
//! [`HttpRequest`](crate::controllers::HttpRequest) and delegate to a
//! controller; read endpoints call the load use cases directly and map
//! errors via [`AppError`](crate::error::AppError).

pub mod appointment;
