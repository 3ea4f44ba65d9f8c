//! Wire-level GraphQL types.

use async_graphql::{ID, InputObject, SimpleObject};
use chrono::NaiveDateTime;

use crate::domain::lead::Lead;
use crate::domain::types::Service;
use crate::forms::lead::RegisterLeadForm;

/// Renders a datastore timestamp as RFC 3339 UTC text with milliseconds.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.and_utc().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// A lead as exposed to API consumers.
#[derive(Clone, Debug, PartialEq, SimpleObject)]
#[graphql(name = "Lead")]
pub struct LeadNode {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub postcode: String,
    pub services: Vec<Service>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Lead> for LeadNode {
    fn from(lead: Lead) -> Self {
        Self {
            id: ID::from(lead.id.get()),
            name: lead.name.into_inner(),
            email: lead.email.into_inner(),
            mobile: lead.mobile.into_inner(),
            postcode: lead.postcode.into_inner(),
            services: lead.services.into_inner(),
            created_at: format_timestamp(lead.created_at),
            updated_at: format_timestamp(lead.updated_at),
        }
    }
}

/// Arguments of the `register` mutation.
#[derive(Clone, Debug, InputObject)]
pub struct RegisterLeadInput {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub postcode: String,
    pub services: Vec<Service>,
}

impl From<RegisterLeadInput> for RegisterLeadForm {
    fn from(input: RegisterLeadInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            mobile: input.mobile,
            postcode: input.postcode,
            services: input
                .services
                .into_iter()
                .map(|service| service.as_str().to_string())
                .collect(),
        }
    }
}
