//! Diesel models for storing leads.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    lead::{Lead as DomainLead, NewLead as DomainNewLead},
    types::{
        LeadEmail, LeadId, LeadName, MobileNumber, Postcode, Service, Services,
        TypeConstraintError,
    },
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::leads)]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub postcode: String,
    pub services: String, // JSON array of service names
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub mobile: &'a str,
    pub postcode: &'a str,
    pub services: String,
}

/// Encodes services as the JSON array stored in the `services` column.
fn encode_services(services: &[Service]) -> String {
    let names = services.iter().map(|s| s.as_str()).collect::<Vec<_>>();
    serde_json::Value::from(names).to_string()
}

/// Decodes the `services` column, rejecting unknown names and empty lists.
fn decode_services(raw: &str) -> Result<Services, TypeConstraintError> {
    let names: Vec<String> = serde_json::from_str(raw)
        .map_err(|_| TypeConstraintError::UnknownService(raw.to_string()))?;
    let services = names
        .iter()
        .map(|name| name.parse::<Service>())
        .collect::<Result<Vec<_>, _>>()?;
    Services::new(services)
}

impl TryFrom<Lead> for DomainLead {
    type Error = TypeConstraintError;

    fn try_from(lead: Lead) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadId::try_from(lead.id)?,
            name: LeadName::new(lead.name)?,
            email: LeadEmail::new(lead.email)?,
            mobile: MobileNumber::new(lead.mobile)?,
            postcode: Postcode::new(lead.postcode)?,
            services: decode_services(&lead.services)?,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewLead> for NewLead<'a> {
    fn from(lead: &'a DomainNewLead) -> Self {
        Self {
            name: lead.name.as_str(),
            email: lead.email.as_str(),
            mobile: lead.mobile.as_str(),
            postcode: lead.postcode.as_str(),
            services: encode_services(&lead.services),
        }
    }
}
