use crate::types::DbId;

/// Domain-level failure raised by use cases and their collaborators.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A single field-level validation failure.
///
/// Validators return these as values; they are never raised through
/// [`CoreError`]. The `Display` output is the human-readable message sent
/// to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing param: {field}")]
    MissingParam { field: String },

    #[error("Invalid param: {field}")]
    InvalidParam { field: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingParam {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidParam {
            field: field.into(),
        }
    }

    /// The error kind reported as `name` in HTTP error bodies.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingParam { .. } => "MissingParamError",
            Self::InvalidParam { .. } => "InvalidParamError",
        }
    }

    /// The offending field (or field description for business rules).
    pub fn field(&self) -> &str {
        match self {
            Self::MissingParam { field } | Self::InvalidParam { field } => field,
        }
    }
}
