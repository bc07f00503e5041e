pub mod alerts;
pub mod demo;
pub mod hosts;
pub mod metrics;
pub mod types;

use crate::config::PulseConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Client for the application-health service. One instance is cloned into
/// every spawned request task; all endpoint groups hang off it as traits.
#[derive(Clone, Debug)]
pub struct PulseClient {
    pub(crate) client: Client,
    pub(crate) config: PulseConfig,
}

impl PulseClient {
    pub fn new(config: PulseConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }
}
