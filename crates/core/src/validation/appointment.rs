//! Validation chains for the appointment operations.

use std::sync::Arc;

use super::{DateValidation, DayValidation, RequiredFieldValidation, Validation, ValidationComposite};
use crate::appointment::{
    LoadAppointmentsByDay, FIELD_APPOINTMENT_DATE, FIELD_BIRTHDAY, FIELD_NAME,
};

/// Checks for creating an appointment: every field is required, both dates
/// must parse, and the chosen day must have room.
pub fn add_appointment_validation(
    load_appointments_by_day: Arc<dyn LoadAppointmentsByDay>,
) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = Vec::new();
    for field in [FIELD_NAME, FIELD_BIRTHDAY, FIELD_APPOINTMENT_DATE] {
        validations.push(Box::new(RequiredFieldValidation::new(field)));
    }
    for field in [FIELD_BIRTHDAY, FIELD_APPOINTMENT_DATE] {
        validations.push(Box::new(DateValidation::new(field)));
    }
    validations.push(Box::new(DayValidation::new(
        FIELD_APPOINTMENT_DATE,
        load_appointments_by_day,
    )));
    ValidationComposite::new(validations)
}

/// Checks for editing an appointment: every field is optional, but dates
/// that are given must parse and the new day must have room.
pub fn edit_appointment_validation(
    load_appointments_by_day: Arc<dyn LoadAppointmentsByDay>,
) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = Vec::new();
    for field in [FIELD_BIRTHDAY, FIELD_APPOINTMENT_DATE] {
        validations.push(Box::new(DateValidation::new(field)));
    }
    validations.push(Box::new(DayValidation::new(
        FIELD_APPOINTMENT_DATE,
        load_appointments_by_day,
    )));
    ValidationComposite::new(validations)
}
