//! Lead listing, lookup and registration.

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::LeadId;
use crate::forms::lead::RegisterLeadForm;
use crate::repository::{LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every lead, newest first.
pub fn list_leads<R>(repo: &R) -> ServiceResult<Vec<Lead>>
where
    R: LeadReader + ?Sized,
{
    repo.list_leads().map_err(|err| {
        log::error!("Failed to list leads: {err}");
        ServiceError::from(err)
    })
}

/// Looks up a lead by the textual identifier supplied by the caller.
///
/// Identifiers that parse but are not positive cannot match a row and yield
/// `None`; text that is not an integer is an error.
pub fn get_lead<R>(repo: &R, raw_id: &str) -> ServiceResult<Option<Lead>>
where
    R: LeadReader + ?Sized,
{
    let id: i32 = raw_id.trim().parse().map_err(|_| {
        log::error!("Failed to parse lead id {raw_id:?}");
        ServiceError::InvalidId(raw_id.to_string())
    })?;

    let Ok(id) = LeadId::new(id) else {
        return Ok(None);
    };

    repo.get_lead_by_id(id).map_err(|err| {
        log::error!("Failed to get lead {id}: {err}");
        ServiceError::from(err)
    })
}

/// Validates the registration form and persists a new lead.
pub fn register_lead<R>(repo: &R, form: RegisterLeadForm) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let new_lead = NewLead::try_from(form).map_err(|err| {
        log::info!("Rejected lead registration: {err}");
        ServiceError::from(err)
    })?;

    repo.create_lead(&new_lead).map_err(|err| {
        let err = ServiceError::from(err);
        match &err {
            ServiceError::Conflict(_) => {
                log::info!("Lead with email {} already exists", new_lead.email)
            }
            _ => log::error!("Failed to register lead: {err}"),
        }
        err
    })
}
