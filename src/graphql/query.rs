use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::graphql::LeadStoreRef;
use crate::graphql::errors::ApiError;
use crate::graphql::types::LeadNode;
use crate::repository::LeadStore;
use crate::services::lead as lead_service;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All leads, newest first.
    async fn leads(&self, ctx: &Context<'_>) -> Result<Vec<LeadNode>> {
        let repo: &dyn LeadStore = ctx.data::<LeadStoreRef>()?.as_ref();

        let leads = lead_service::list_leads(repo)
            .map_err(|err| ApiError::from_service(err, "Failed to fetch leads").extend())?;

        Ok(leads.into_iter().map(LeadNode::from).collect())
    }

    /// A single lead, or null when no lead has this id.
    async fn lead(&self, ctx: &Context<'_>, id: ID) -> Result<Option<LeadNode>> {
        let repo: &dyn LeadStore = ctx.data::<LeadStoreRef>()?.as_ref();

        let lead = lead_service::get_lead(repo, id.as_str())
            .map_err(|err| ApiError::from_service(err, "Failed to fetch lead").extend())?;

        Ok(lead.map(LeadNode::from))
    }
}
