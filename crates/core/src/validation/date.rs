//! Date parsing policy and the field-level date check.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

use super::{field_value, Validation, ValidationInput, ValidationOutcome};
use crate::error::ValidationError;
use crate::types::Timestamp;

/// Parse an RFC 3339 date-time or an ISO-8601 calendar date (`YYYY-MM-DD`,
/// read as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Decides whether a present JSON value is an acceptable date.
pub trait DateValidator: Send + Sync {
    fn is_valid(&self, value: &Value) -> bool;
}

/// Default policy: a string accepted by [`parse_timestamp`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateValidator;

impl DateValidator for ChronoDateValidator {
    fn is_valid(&self, value: &Value) -> bool {
        value.as_str().and_then(parse_timestamp).is_some()
    }
}

/// Fails with `InvalidParam` when the field is present but not a valid date.
/// Absence is left to [`super::RequiredFieldValidation`].
pub struct DateValidation {
    field: String,
    date_validator: Arc<dyn DateValidator>,
}

impl DateValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self::with_validator(field, Arc::new(ChronoDateValidator))
    }

    pub fn with_validator(field: impl Into<String>, date_validator: Arc<dyn DateValidator>) -> Self {
        Self {
            field: field.into(),
            date_validator,
        }
    }
}

#[async_trait]
impl Validation for DateValidation {
    async fn validate(&self, input: &ValidationInput) -> ValidationOutcome {
        Ok(field_value(input, &self.field)
            .filter(|value| !self.date_validator.is_valid(value))
            .map(|_| ValidationError::invalid(&self.field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    struct RejectAll;

    impl DateValidator for RejectAll {
        fn is_valid(&self, _value: &Value) -> bool {
            false
        }
    }

    fn input(value: Value) -> ValidationInput {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("2026-10-19T09:00:00-03:00"),
            Some(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_calendar_date_as_midnight_utc() {
        assert_eq!(
            parse_timestamp("2026-10-19"),
            Some(Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_timestamp("invalid_date"), None);
        assert_eq!(parse_timestamp("2026-02-30"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn chrono_validator_requires_strings() {
        assert!(ChronoDateValidator.is_valid(&json!("2026-10-19")));
        assert!(!ChronoDateValidator.is_valid(&json!(1_760_000_000)));
        assert!(!ChronoDateValidator.is_valid(&json!(true)));
    }

    #[tokio::test]
    async fn fails_on_invalid_date() {
        let sut = DateValidation::new("birthday");
        let result = sut
            .validate(&input(json!({ "birthday": "invalid_date" })))
            .await
            .unwrap();
        assert_eq!(result, Some(ValidationError::invalid("birthday")));
    }

    #[tokio::test]
    async fn passes_on_valid_date() {
        let sut = DateValidation::new("birthday");
        let result = sut
            .validate(&input(json!({ "birthday": "2006-10-18T00:00:00.000Z" })))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn ignores_absent_field() {
        let sut = DateValidation::with_validator("birthday", Arc::new(RejectAll));
        let result = sut.validate(&input(json!({}))).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn uses_injected_policy() {
        let sut = DateValidation::with_validator("birthday", Arc::new(RejectAll));
        let result = sut
            .validate(&input(json!({ "birthday": "2006-10-18" })))
            .await
            .unwrap();
        assert_eq!(result, Some(ValidationError::invalid("birthday")));
    }
}
