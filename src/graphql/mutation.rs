use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::graphql::LeadStoreRef;
use crate::graphql::errors::ApiError;
use crate::graphql::types::{LeadNode, RegisterLeadInput};
use crate::repository::LeadStore;
use crate::services::lead as lead_service;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Validates and stores a new lead.
    async fn register(&self, ctx: &Context<'_>, input: RegisterLeadInput) -> Result<LeadNode> {
        let repo: &dyn LeadStore = ctx.data::<LeadStoreRef>()?.as_ref();

        let lead = lead_service::register_lead(repo, input.into())
            .map_err(|err| ApiError::from_service(err, "Failed to register lead").extend())?;

        Ok(lead.into())
    }
}
