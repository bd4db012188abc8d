use std::time::Duration;

use serde::Deserialize;

pub mod loader;

pub use loader::AppConfig;

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

/// One downstream collaborator (identity or catalog).
#[derive(Clone, Debug, Deserialize)]
pub struct DownstreamTarget {
    pub base_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DownstreamConfig {
    pub timeout_ms: u64,
}

impl DownstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
