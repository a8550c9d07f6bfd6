//! Day-capacity rule: a calendar day accepts at most
//! [`MAX_APPOINTMENTS_PER_DAY`] appointments.

use std::sync::Arc;

use async_trait::async_trait;

use super::date::parse_timestamp;
use super::{field_value, Validation, ValidationInput, ValidationOutcome};
use crate::appointment::LoadAppointmentsByDay;
use crate::error::ValidationError;

/// Once a day holds this many appointments, further bookings are refused.
pub const MAX_APPOINTMENTS_PER_DAY: usize = 20;

/// Rejects a date whose day is already at capacity.
///
/// Only runs when the field holds a parseable date: absence belongs to
/// [`super::RequiredFieldValidation`] and malformed values to
/// [`super::DateValidation`]. In both cases the lookup is never called.
pub struct DayValidation {
    field: String,
    load_appointments_by_day: Arc<dyn LoadAppointmentsByDay>,
}

impl DayValidation {
    pub fn new(
        field: impl Into<String>,
        load_appointments_by_day: Arc<dyn LoadAppointmentsByDay>,
    ) -> Self {
        Self {
            field: field.into(),
            load_appointments_by_day,
        }
    }
}

#[async_trait]
impl Validation for DayValidation {
    async fn validate(&self, input: &ValidationInput) -> ValidationOutcome {
        let Some(date) = field_value(input, &self.field)
            .and_then(|value| value.as_str())
            .and_then(parse_timestamp)
        else {
            return Ok(None);
        };

        let day = date.date_naive();
        let booked = self.load_appointments_by_day.load_by_day(day).await?;
        if booked.len() >= MAX_APPOINTMENTS_PER_DAY {
            tracing::debug!(%day, booked = booked.len(), "Day is already full");
            return Ok(Some(ValidationError::invalid(format!(
                "{} day, the chosen day is already full",
                self.field
            ))));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::usecases::DbLoadAppointmentsByDay;
    use crate::error::CoreError;
    use crate::test_support::{in_days, InMemoryAppointments, StubLoadByDay};
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn make_sut(stub: &Arc<StubLoadByDay>) -> DayValidation {
        DayValidation::new("appointment_date", stub.clone())
    }

    fn tomorrow_input() -> ValidationInput {
        let mut input = ValidationInput::new();
        input.insert(
            "appointment_date".into(),
            Value::String(in_days(1).to_rfc3339()),
        );
        input
    }

    #[tokio::test]
    async fn passes_without_lookup_when_date_is_absent() {
        let stub = Arc::new(StubLoadByDay::failing());
        let sut = make_sut(&stub);

        let mut input = ValidationInput::new();
        input.insert("appointment_date".into(), Value::Null);

        assert_eq!(sut.validate(&input).await.unwrap(), None);
        assert_eq!(sut.validate(&ValidationInput::new()).await.unwrap(), None);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn skips_lookup_for_unparseable_date() {
        let stub = Arc::new(StubLoadByDay::returning(20));
        let sut = make_sut(&stub);
        let input = json!({ "appointment_date": "invalid_date" });

        let result = sut.validate(input.as_object().unwrap()).await.unwrap();

        assert_eq!(result, None);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn rejects_a_full_day() {
        let stub = Arc::new(StubLoadByDay::returning(20));
        let sut = make_sut(&stub);

        let result = sut.validate(&tomorrow_input()).await.unwrap();

        assert_eq!(
            result,
            Some(ValidationError::invalid(
                "appointment_date day, the chosen day is already full"
            ))
        );
        assert_eq!(
            result.unwrap().to_string(),
            "Invalid param: appointment_date day, the chosen day is already full"
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn rejects_an_overbooked_day() {
        let stub = Arc::new(StubLoadByDay::returning(25));
        let result = make_sut(&stub).validate(&tomorrow_input()).await.unwrap();
        assert_matches!(result, Some(ValidationError::InvalidParam { .. }));
    }

    #[tokio::test]
    async fn accepts_a_day_with_free_slots() {
        for count in [0, 1, 19] {
            let stub = Arc::new(StubLoadByDay::returning(count));
            let result = make_sut(&stub).validate(&tomorrow_input()).await.unwrap();
            assert_eq!(result, None, "{count} booked appointments should leave room");
        }
    }

    #[tokio::test]
    async fn propagates_lookup_failure() {
        let stub = Arc::new(StubLoadByDay::failing());
        let result = make_sut(&stub).validate(&tomorrow_input()).await;
        assert_matches!(result, Err(CoreError::Internal(_)));
    }

    #[tokio::test]
    async fn handles_the_last_representable_day() {
        let lookup = DbLoadAppointmentsByDay::new(Arc::new(InMemoryAppointments::default()));
        let sut = DayValidation::new("appointment_date", Arc::new(lookup));
        let input = json!({ "appointment_date": NaiveDate::MAX.to_string() });

        let result = sut.validate(input.as_object().unwrap()).await;

        assert_matches!(result, Ok(None));
    }
}
