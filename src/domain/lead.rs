use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{LeadEmail, LeadId, LeadName, MobileNumber, Postcode, Services};

/// Stored lead with the identifier and timestamps assigned by the datastore.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Lead {
    pub id: LeadId,
    pub name: LeadName,
    pub email: LeadEmail,
    pub mobile: MobileNumber,
    pub postcode: Postcode,
    pub services: Services,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated registration payload ready to be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLead {
    pub name: LeadName,
    pub email: LeadEmail,
    pub mobile: MobileNumber,
    pub postcode: Postcode,
    pub services: Services,
}

impl NewLead {
    #[must_use]
    pub fn new(
        name: LeadName,
        email: LeadEmail,
        mobile: MobileNumber,
        postcode: Postcode,
        services: Services,
    ) -> Self {
        Self {
            name,
            email,
            mobile,
            postcode,
            services,
        }
    }
}
