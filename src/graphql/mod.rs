//! GraphQL schema for the lead API.
//!
//! Resolvers are thin: they pull the repository out of the schema context,
//! call into [`crate::services::lead`] and classify failures with
//! [`errors::ApiError`].

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::repository::LeadStore;

pub mod errors;
pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// Repository handle injected into the schema context.
pub type LeadStoreRef = Arc<dyn LeadStore>;

pub type LeadSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around the given repository.
pub fn build_schema(repo: LeadStoreRef) -> LeadSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repo)
        .finish()
}

/// Renders the public schema in SDL form without attaching a repository.
pub fn export_schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::lead::{Lead, NewLead};
    use crate::domain::types::{
        LeadEmail, LeadId, LeadName, MobileNumber, Postcode, Service, Services,
    };
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn lead(id: i32, name: &str, email: &str, day: u32) -> Lead {
        let timestamp = NaiveDate::from_ymd_opt(2023, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Lead {
            id: LeadId::new(id).unwrap(),
            name: LeadName::new(name).unwrap(),
            email: LeadEmail::new(email).unwrap(),
            mobile: MobileNumber::new("0412345678").unwrap(),
            postcode: Postcode::new("2000").unwrap(),
            services: Services::new(vec![Service::Delivery, Service::Payment]).unwrap(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    fn stored(new_lead: &NewLead) -> Lead {
        let mut lead = lead(3, "placeholder", "placeholder@example.com", 3);
        lead.name = new_lead.name.clone();
        lead.email = new_lead.email.clone();
        lead.mobile = new_lead.mobile.clone();
        lead.postcode = new_lead.postcode.clone();
        lead.services = new_lead.services.clone();
        lead
    }

    async fn execute(repo: MockRepository, query: &str) -> (Value, Vec<Value>) {
        let schema = build_schema(Arc::new(repo));
        let response = schema.execute(query).await;
        let data = response.data.clone().into_json().unwrap();
        let errors = response
            .errors
            .iter()
            .map(|e| serde_json::to_value(e).unwrap())
            .collect();
        (data, errors)
    }

    const REGISTER: &str = r#"
        mutation {
            register(input: {
                name: "Test User",
                email: "test@example.com",
                mobile: "0411222333",
                postcode: "4000",
                services: [DELIVERY, PICKUP]
            }) {
                id name email mobile postcode services createdAt updatedAt
            }
        }
    "#;

    #[actix_web::test]
    async fn leads_query_returns_all_leads() {
        let mut repo = MockRepository::new();
        repo.expect_list_leads().times(1).returning(|| {
            Ok(vec![
                lead(2, "Jane Smith", "jane@example.com", 2),
                lead(1, "John Doe", "john@example.com", 1),
            ])
        });

        let (data, errors) =
            execute(repo, "{ leads { id name email services createdAt } }").await;

        assert!(errors.is_empty());
        assert_eq!(data["leads"].as_array().unwrap().len(), 2);
        assert_eq!(data["leads"][0]["id"], json!("2"));
        assert_eq!(data["leads"][0]["services"], json!(["DELIVERY", "PAYMENT"]));
        assert_eq!(data["leads"][0]["createdAt"], json!("2023-01-02T00:00:00.000Z"));
    }

    #[actix_web::test]
    async fn leads_query_hides_database_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_leads()
            .returning(|| Err(RepositoryError::DatabaseError("disk I/O error".to_string())));

        let (_, errors) = execute(repo, "{ leads { id } }").await;

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["message"], json!("Failed to fetch leads"));
        assert_eq!(errors[0]["extensions"]["code"], json!("DATABASE_ERROR"));
    }

    #[actix_web::test]
    async fn lead_query_returns_lead_by_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id()
            .withf(|id| id.get() == 1)
            .returning(|_| Ok(Some(lead(1, "John Doe", "john@example.com", 1))));

        let (data, errors) = execute(repo, r#"{ lead(id: "1") { id name } }"#).await;

        assert!(errors.is_empty());
        assert_eq!(data["lead"], json!({ "id": "1", "name": "John Doe" }));
    }

    #[actix_web::test]
    async fn lead_query_returns_null_when_missing() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id().returning(|_| Ok(None));

        let (data, errors) = execute(repo, r#"{ lead(id: "999") { id } }"#).await;

        assert!(errors.is_empty());
        assert_eq!(data["lead"], Value::Null);
    }

    #[actix_web::test]
    async fn lead_query_with_non_numeric_id_is_data_access_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id().never();

        let (_, errors) = execute(repo, r#"{ lead(id: "abc") { id } }"#).await;

        assert_eq!(errors[0]["message"], json!("Failed to fetch lead"));
        assert_eq!(errors[0]["extensions"]["code"], json!("DATABASE_ERROR"));
    }

    #[actix_web::test]
    async fn register_returns_created_lead() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead()
            .times(1)
            .returning(|new_lead| Ok(stored(new_lead)));

        let (data, errors) = execute(repo, REGISTER).await;

        assert!(errors.is_empty(), "{errors:?}");
        let lead = &data["register"];
        assert_eq!(lead["id"], json!("3"));
        assert_eq!(lead["name"], json!("Test User"));
        assert_eq!(lead["email"], json!("test@example.com"));
        assert_eq!(lead["mobile"], json!("0411222333"));
        assert_eq!(lead["postcode"], json!("4000"));
        assert_eq!(lead["services"], json!(["DELIVERY", "PICKUP"]));
        assert_eq!(lead["createdAt"], lead["updatedAt"]);
    }

    #[actix_web::test]
    async fn register_reports_every_invalid_field() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead().never();

        let query = r#"
            mutation {
                register(input: {
                    name: "",
                    email: "notanemail",
                    mobile: "12345",
                    postcode: "200",
                    services: []
                }) { id }
            }
        "#;
        let (_, errors) = execute(repo, query).await;

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["message"], json!("Validation error"));
        assert_eq!(errors[0]["extensions"]["code"], json!("BAD_USER_INPUT"));
        let paths: Vec<Value> = errors[0]["extensions"]["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|violation| violation["path"][0].clone())
            .collect();
        assert_eq!(
            paths,
            vec![
                json!("name"),
                json!("email"),
                json!("mobile"),
                json!("postcode"),
                json!("services")
            ]
        );
    }

    #[actix_web::test]
    async fn register_duplicate_email_is_bad_input() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead().returning(|_| {
            Err(RepositoryError::DuplicateEntry(
                "UNIQUE constraint failed: leads.email".to_string(),
            ))
        });

        let (_, errors) = execute(repo, REGISTER).await;

        assert_eq!(errors[0]["message"], json!("Email already exists"));
        assert_eq!(errors[0]["extensions"]["code"], json!("BAD_USER_INPUT"));
    }

    #[actix_web::test]
    async fn register_storage_failure_is_generic() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead()
            .returning(|_| Err(RepositoryError::ConnectionError("pool timeout".to_string())));

        let (_, errors) = execute(repo, REGISTER).await;

        assert_eq!(errors[0]["message"], json!("Failed to register lead"));
        assert_eq!(errors[0]["extensions"]["code"], json!("DATABASE_ERROR"));
    }

    #[test]
    fn sdl_declares_the_public_contract() {
        let sdl = export_schema_sdl();
        assert_eq!(sdl, build_schema(Arc::new(MockRepository::new())).sdl());

        assert!(sdl.contains("enum Service"));
        assert!(sdl.contains("DELIVERY"));
        assert!(sdl.contains("input RegisterLeadInput"));
        assert!(sdl.contains("register(input: RegisterLeadInput!): Lead!"));
        assert!(sdl.contains("lead(id: ID!): Lead"));
        assert!(sdl.contains("leads: [Lead!]!"));
        assert!(sdl.contains("createdAt: String!"));
    }
}
