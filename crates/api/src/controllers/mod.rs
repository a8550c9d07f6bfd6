//! Controllers adapt a transport-level [`HttpRequest`] to the appointment
//! use cases and turn every outcome into an [`HttpResponse`].
//!
//! A controller is the error boundary of a request: validation failures,
//! use-case conflicts and collaborator errors all come back as responses,
//! never as `Err` or panics.

pub mod add_appointment;
pub mod edit_appointment;

use std::collections::HashMap;

use async_trait::async_trait;
use schedule_core::validation::ValidationInput;

use crate::response::HttpResponse;

pub use add_appointment::AddAppointmentController;
pub use edit_appointment::EditAppointmentController;

/// Request as seen by a controller: the JSON body plus path parameters.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub body: ValidationInput,
    pub params: HashMap<String, String>,
}

impl HttpRequest {
    pub fn new(body: ValidationInput) -> Self {
        Self {
            body,
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
