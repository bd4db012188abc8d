use config::{Config, Environment, File};
use serde::Deserialize;

use crate::config::{DownstreamConfig, DownstreamTarget, ServerConfig};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub identity: DownstreamTarget,
    pub catalog: DownstreamTarget,
    pub downstream: DownstreamConfig,
}

impl AppConfig {
    /// Layered load: built-in defaults, then `config/default.toml` when
    /// present, then `ACCOUNTS__`-prefixed environment variables
    /// (e.g. `ACCOUNTS__IDENTITY__BASE_URL`).
    pub fn load() -> Result<Self> {
        build()
            .and_then(Config::try_deserialize)
            .map_err(|e| Error::ConfigError(e.to_string()))
    }
}

fn build() -> std::result::Result<Config, config::ConfigError> {
    Config::builder()
        .set_default("server.port", 3000_i64)?
        .set_default("identity.base_url", "http://localhost:3001")?
        .set_default("catalog.base_url", "http://localhost:3002")?
        .set_default("downstream.timeout_ms", 5000_i64)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("ACCOUNTS").separator("__"))
        .build()
}
