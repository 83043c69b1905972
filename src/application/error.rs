// src/application/error.rs
use crate::application::validation::FieldErrors;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid form: {0}")]
    Invalid(FieldErrors),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Message key of a business-rule rejection that a form page can show
    /// next to the submitted values. `None` for infrastructure failures and
    /// field-level validation errors.
    pub fn business_message(&self) -> Option<&str> {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => Some(msg),
            Self::Domain(
                DomainError::Validation(msg)
                | DomainError::Conflict(msg)
                | DomainError::NotFound(msg),
            ) => Some(msg),
            Self::Domain(DomainError::Persistence(_))
            | Self::Invalid(_)
            | Self::Infrastructure(_) => None,
        }
    }
}
