//! Registration form shared by the GraphQL mutation and the seeding tool.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::lead::NewLead;
use crate::domain::types::{
    LeadEmail, LeadName, MobileNumber, Postcode, Service, Services, is_valid_email,
};
use crate::forms::{FieldViolation, FormError, collect_violations};

const FIELD_ORDER: [&str; 5] = ["name", "email", "mobile", "postcode", "services"];

fn validate_lead_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed("Invalid email format")))
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
/// Raw lead registration request.
pub struct RegisterLeadForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_lead_email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Mobile number must be at least 6 characters"))]
    pub mobile: String,
    #[validate(length(min = 4, message = "Postcode must be at least 4 characters"))]
    pub postcode: String,
    /// Service names as submitted; checked against [`Service`].
    #[validate(length(min = 1, message = "At least one service must be selected"))]
    #[serde(default)]
    pub services: Vec<String>,
}

impl RegisterLeadForm {
    /// Runs every rule and returns all failures in field order.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_violations(&errors, &FIELD_ORDER),
        };

        for (index, raw) in self.services.iter().enumerate() {
            if raw.parse::<Service>().is_err() {
                violations.push(FieldViolation::element(
                    "services",
                    index,
                    format!(
                        "Invalid enum value. Expected 'DELIVERY' | 'PICKUP' | 'PAYMENT', received '{raw}'"
                    ),
                ));
            }
        }

        violations
    }
}

impl TryFrom<RegisterLeadForm> for NewLead {
    type Error = FormError;

    fn try_from(form: RegisterLeadForm) -> Result<Self, Self::Error> {
        let violations = form.violations();
        if !violations.is_empty() {
            return Err(FormError::Validation(violations));
        }

        let services = form
            .services
            .iter()
            .map(|raw| raw.parse::<Service>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewLead::new(
            LeadName::new(form.name)?,
            LeadEmail::new(form.email)?,
            MobileNumber::new(form.mobile)?,
            Postcode::new(form.postcode)?,
            Services::new(services)?,
        ))
    }
}
