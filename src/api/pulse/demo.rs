use super::PulseClient;
use super::types::TestDataResponse;
use crate::config::DbProbeConfig;
use anyhow::{Context, Result};

/// Demo-app endpoints: the sample-data table, the db connection probe and the
/// plain-text clock. The probe and the clock are the two endpoints that do not
/// speak JSON.
pub(crate) trait DemoApi {
    async fn get_test_data(&self) -> Result<TestDataResponse>;

    async fn test_db_connection(&self, probe: &DbProbeConfig) -> Result<String>;

    async fn get_current_time(&self) -> Result<String>;
}

impl DemoApi for PulseClient {
    async fn get_test_data(&self) -> Result<TestDataResponse> {
        let url = self.endpoint("api/showTestDataJson");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send test data request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let data = response
            .json::<TestDataResponse>()
            .await
            .context("Failed to parse test data response")?;
        Ok(data)
    }

    async fn test_db_connection(&self, probe: &DbProbeConfig) -> Result<String> {
        let url = self.endpoint("testDbConnection");

        let form = [
            ("url", probe.url.as_str()),
            ("username", probe.username.as_str()),
            ("password", probe.password.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .context("Failed to send db probe request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        // plain text body, shown verbatim
        let body = response
            .text()
            .await
            .context("Failed to read db probe response")?;
        Ok(body)
    }

    async fn get_current_time(&self) -> Result<String> {
        let url = self.endpoint("currentTime");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send current time request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let body = response
            .text()
            .await
            .context("Failed to read current time response")?;
        Ok(body)
    }
}
