//! Repository implementation for leads.

use diesel::prelude::*;

use crate::{
    domain::{
        lead::{Lead, NewLead},
        types::LeadId,
    },
    models::lead::{Lead as DbLead, NewLead as DbNewLead},
    repository::{
        DieselRepository, LeadMaintenance, LeadReader, LeadWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl LeadReader for DieselRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let leads = leads::table
            .order((leads::created_at.desc(), leads::id.desc()))
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Lead::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok(leads)
    }

    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let lead = leads::table
            .find(id.get())
            .first::<DbLead>(&mut conn)
            .optional()?;

        lead.map(Lead::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let db_new_lead: DbNewLead = new_lead.into();

        let created = diesel::insert_into(leads::table)
            .values(&db_new_lead)
            .get_result::<DbLead>(&mut conn)?;

        Lead::try_from(created).map_err(RepositoryError::from)
    }
}

impl LeadMaintenance for DieselRepository {
    fn clear_leads(&self) -> RepositoryResult<usize> {
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let removed = diesel::delete(leads::table).execute(&mut conn)?;

        Ok(removed)
    }
}
