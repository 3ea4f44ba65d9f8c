use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        lead::{Lead, NewLead},
        types::LeadId,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod lead;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository shared by every request handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait LeadReader {
    /// Returns every lead, newest first.
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
}

/// Administrative operations not exposed through the API.
pub trait LeadMaintenance {
    /// Deletes every lead and returns the number of removed rows.
    fn clear_leads(&self) -> RepositoryResult<usize>;
}

/// Everything the API needs from storage, usable as a trait object.
pub trait LeadStore: LeadReader + LeadWriter + Send + Sync {}

impl<T> LeadStore for T where T: LeadReader + LeadWriter + Send + Sync {}
