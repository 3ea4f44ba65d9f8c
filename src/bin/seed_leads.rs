//! Replaces every stored lead with a single sample record.

use std::env;

use dotenvy::dotenv;

use pushkind_leads::db::establish_connection_pool;
use pushkind_leads::domain::lead::NewLead;
use pushkind_leads::forms::lead::RegisterLeadForm;
use pushkind_leads::models::config::ServerConfig;
use pushkind_leads::repository::{DieselRepository, LeadMaintenance, LeadWriter};

fn sample_lead() -> RegisterLeadForm {
    RegisterLeadForm {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        mobile: "0412345678".to_string(),
        postcode: "2000".to_string(),
        services: vec!["DELIVERY".to_string(), "PAYMENT".to_string()],
    }
}

fn seed<R>(repo: &R) -> Result<(), Box<dyn std::error::Error>>
where
    R: LeadMaintenance + LeadWriter,
{
    let removed = repo.clear_leads()?;
    log::info!("Removed {removed} existing lead(s)");

    let new_lead = NewLead::try_from(sample_lead())?;
    let lead = repo.create_lead(&new_lead)?;
    log::info!("Created test lead: {}", serde_json::to_string(&lead)?);

    Ok(())
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load("config", &app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = seed(&DieselRepository::new(pool)) {
        log::error!("Error seeding data: {err}");
        std::process::exit(1);
    }
}
