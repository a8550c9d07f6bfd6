//! Stub collaborators and fixtures shared by the unit tests of this crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::appointment::{
    AddAppointmentParams, Appointment, AppointmentRepository, EditAppointmentParams,
    LoadAppointmentsByDay,
};
use crate::error::CoreError;
use crate::types::{Date, DbId, Timestamp};

pub fn in_days(days: i64) -> Timestamp {
    Utc::now() + Duration::days(days)
}

pub fn twenty_years_ago() -> Date {
    let today = Utc::now().date_naive();
    NaiveDate::from_ymd_opt(today.year() - 20, today.month(), today.day().min(28))
        .expect("valid birthday")
}

pub fn add_params(name: &str) -> AddAppointmentParams {
    AddAppointmentParams {
        name: name.to_string(),
        birthday: twenty_years_ago(),
        appointment_date: in_days(1),
    }
}

/// `count` appointments on `day`, each at a different time of day.
pub fn appointments_with_different_hours(count: usize, day: Date) -> Vec<Appointment> {
    (0..count)
        .map(|i| {
            let hour = (i % 24) as u32;
            let minute = (i / 24 % 60) as u32;
            let appointment_date = Utc
                .with_ymd_and_hms(day.year(), day.month(), day.day(), hour, minute, 0)
                .single()
                .expect("valid appointment time");
            Appointment {
                id: i as DbId + 1,
                name: format!("patient_{i}"),
                birthday: twenty_years_ago(),
                appointment_date,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Day lookup stub
// ---------------------------------------------------------------------------

/// Returns `count` appointments for whatever day is asked and records calls.
pub struct StubLoadByDay {
    count: usize,
    fail: bool,
    calls: AtomicUsize,
}

impl StubLoadByDay {
    pub fn returning(count: usize) -> Self {
        Self {
            count,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            count: 0,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoadAppointmentsByDay for StubLoadByDay {
    async fn load_by_day(&self, day: Date) -> Result<Vec<Appointment>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CoreError::Internal("day lookup unavailable".into()));
        }
        Ok(appointments_with_different_hours(self.count, day))
    }
}

// ---------------------------------------------------------------------------
// In-memory repository
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryAppointments {
    rows: Mutex<Vec<Appointment>>,
    fail: bool,
}

impl InMemoryAppointments {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            fail: true,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), CoreError> {
        if self.fail {
            Err(CoreError::Internal("storage unavailable".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    async fn add(&self, params: &AddAppointmentParams) -> Result<Appointment, CoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let appointment = Appointment {
            id: rows.len() as DbId + 1,
            name: params.name.clone(),
            birthday: params.birthday,
            appointment_date: params.appointment_date,
        };
        rows.push(appointment.clone());
        Ok(appointment)
    }

    async fn update(
        &self,
        params: &EditAppointmentParams,
    ) -> Result<Option<Appointment>, CoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|a| a.id == params.id).map(|row| {
            if let Some(name) = &params.name {
                row.name = name.clone();
            }
            if let Some(birthday) = params.birthday {
                row.birthday = birthday;
            }
            if let Some(date) = params.appointment_date {
                row.appointment_date = date;
            }
            row.clone()
        }))
    }

    async fn load_by_name(&self, name: &str) -> Result<Option<Appointment>, CoreError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.name == name).cloned())
    }

    async fn load_by_id(&self, id: DbId) -> Result<Option<Appointment>, CoreError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn load_between(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Appointment>, CoreError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        let mut found: Vec<_> = rows
            .iter()
            .filter(|a| a.appointment_date >= start && a.appointment_date < end)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.appointment_date);
        Ok(found)
    }
}
