//! Prints every stored lead as JSON.

use std::env;

use dotenvy::dotenv;

use pushkind_leads::db::establish_connection_pool;
use pushkind_leads::models::config::ServerConfig;
use pushkind_leads::repository::{DieselRepository, LeadReader};

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

    let leads = match DieselRepository::new(pool).list_leads() {
        Ok(leads) => leads,
        Err(err) => {
            log::error!("Error querying leads: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Found leads: {}", leads.len());
    match serde_json::to_string_pretty(&leads) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to encode leads: {err}");
            std::process::exit(1);
        }
    }
}
