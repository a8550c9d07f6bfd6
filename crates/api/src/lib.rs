//! Appointment scheduling API server library.
//!
//! Exposes the building blocks (config, state, error handling, controllers,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod config;
pub mod controllers;
pub mod error;
pub mod factories;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
