//! Form definitions backing the lead API.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod lead;

/// One step in the path to an offending input value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A single failed rule, tagged with the path of the offending field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl FieldViolation {
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: vec![PathSegment::Field(name.into())],
            message: message.into(),
        }
    }

    pub fn element(name: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self {
            path: vec![PathSegment::Field(name.into()), PathSegment::Index(index)],
            message: message.into(),
        }
    }

    /// Returns `true` when the first path segment names `field`.
    pub fn targets(&self, field: &str) -> bool {
        matches!(self.path.first(), Some(PathSegment::Field(name)) if name == field)
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let path = self
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{path}: {}", self.message)
    }
}

/// Flattens `validator` errors into violations, visiting fields in `order`.
pub(crate) fn collect_violations(
    errors: &ValidationErrors,
    order: &[&'static str],
) -> Vec<FieldViolation> {
    let field_errors = errors.field_errors();
    let mut violations = Vec::new();

    for field in order {
        let Some(errors) = field_errors.get(*field) else {
            continue;
        };
        for error in errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            violations.push(FieldViolation::field(*field, message));
        }
    }

    violations
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}
