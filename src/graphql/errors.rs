//! Classification of service failures into API error categories.

use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::forms::FieldViolation;
use crate::services::ServiceError;

pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const DATABASE_ERROR: &str = "DATABASE_ERROR";

/// Errors returned to API consumers. Internal causes never reach the message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    BadInput {
        message: String,
        violations: Vec<FieldViolation>,
    },

    #[error("{0}")]
    DataAccess(&'static str),
}

impl ApiError {
    /// Classifies `err`, using `failure` as the generic data-access message.
    pub fn from_service(err: ServiceError, failure: &'static str) -> Self {
        match err {
            ServiceError::Validation(violations) => ApiError::BadInput {
                message: "Validation error".to_string(),
                violations,
            },
            ServiceError::Conflict(_) => ApiError::BadInput {
                message: "Email already exists".to_string(),
                violations: Vec::new(),
            },
            ServiceError::InvalidId(_)
            | ServiceError::TypeConstraint(_)
            | ServiceError::Internal(_) => ApiError::DataAccess(failure),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadInput { .. } => BAD_USER_INPUT,
            ApiError::DataAccess(_) => DATABASE_ERROR,
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let ApiError::BadInput { violations, .. } = self {
                if violations.is_empty() {
                    return;
                }
                match async_graphql::to_value(violations) {
                    Ok(value) => e.set("errors", value),
                    Err(err) => log::error!("Failed to encode validation errors: {err}"),
                }
            }
        })
    }
}
