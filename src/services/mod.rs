//! Services orchestrating validation and persistence of leads.

use thiserror::Error;

use crate::forms::{FieldViolation, FormError};
use crate::repository::errors::RepositoryError;

pub mod lead;

/// Failure kinds surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted form broke one or more rules.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// The record collides with an existing one.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateEntry(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(violations) => ServiceError::Validation(violations),
            FormError::TypeConstraint(err) => err.into(),
        }
    }
}
