//! Appointment scheduling domain: types, errors, the validation pipeline and
//! the use cases that orchestrate persistence.
//!
//! This crate has no database or HTTP dependency. Persistence is reached
//! through the [`appointment::AppointmentRepository`] trait, implemented in
//! `schedule-db`.

pub mod appointment;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_support;
