use super::PulseClient;
use super::types::AlertReport;
use anyhow::{Context, Result};

pub(crate) trait AlertsApi {
    async fn get_alert_report(&self, hours: u32, test_count: Option<u32>) -> Result<AlertReport>;

    async fn toggle_meter(&self, id: &str, enabled: bool) -> Result<serde_json::Value>;
}

impl AlertsApi for PulseClient {
    async fn get_alert_report(&self, hours: u32, test_count: Option<u32>) -> Result<AlertReport> {
        let mut url = format!("{}?hours={}", self.endpoint("report"), hours);

        if let Some(count) = test_count {
            url.push_str(&format!("&testCount={}", count));
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send alert report request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let report = response
            .json::<AlertReport>()
            .await
            .context("Failed to parse alert report")?;
        Ok(report)
    }

    // The server echoes the toggle outcome as free-form JSON which the UI
    // shows verbatim, so no schema is imposed here.
    async fn toggle_meter(&self, id: &str, enabled: bool) -> Result<serde_json::Value> {
        let url = format!(
            "{}?id={}&enabled={}",
            self.endpoint("toggleMeter"),
            id,
            enabled
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send toggle request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let outcome = response
            .json::<serde_json::Value>()
            .await
            .context("Failed to parse toggle response")?;
        Ok(outcome)
    }
}
