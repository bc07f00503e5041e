pub mod types;

use crate::config::DirectoryConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use types::UserInfo;

/// Client for the corporate directory service backing the user-detail popup.
#[derive(Clone, Debug)]
pub struct DirectoryClient {
    client: Client,
    config: DirectoryConfig,
}

impl DirectoryClient {
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    pub async fn get_user_info(&self, userid: &str) -> Result<UserInfo> {
        let url = format!(
            "{}/userInfo/{}",
            self.config.api_url.trim_end_matches('/'),
            userid
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send user info request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let user = response
            .json::<UserInfo>()
            .await
            .context("Failed to parse user info")?;
        Ok(user)
    }
}
