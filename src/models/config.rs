//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings required to start the API server and the admin tools.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Layers `{dir}/default`, optional `{dir}/{app_env}` and `APP_*` variables.
    pub fn load(dir: &str, app_env: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
