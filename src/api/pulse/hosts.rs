use super::PulseClient;
use super::types::HungReportResponse;
use anyhow::{Context, Result};

/// Query fields for the hung-host sweep, edited in the Hosts form popup and
/// serialized as-is onto the request.
#[derive(Clone, Debug)]
pub struct HostQuery {
    pub backlog_queue: String,
    pub processed_queue: String,
    pub host_pattern: String,
    pub host_count: String,
    pub sample_count: String,
    pub expression: String,
}

impl Default for HostQuery {
    fn default() -> Self {
        Self {
            backlog_queue: String::new(),
            processed_queue: String::new(),
            host_pattern: "*".to_string(),
            host_count: "10".to_string(),
            sample_count: "3".to_string(),
            expression: String::new(),
        }
    }
}

pub(crate) trait HostsApi {
    async fn get_hung_report(&self, query: &HostQuery) -> Result<HungReportResponse>;
}

impl HostsApi for PulseClient {
    async fn get_hung_report(&self, query: &HostQuery) -> Result<HungReportResponse> {
        let url = self.endpoint("hungReport");

        let params = [
            ("backlogQ", query.backlog_queue.as_str()),
            ("processedQ", query.processed_queue.as_str()),
            ("hostPattern", query.host_pattern.as_str()),
            ("hostCount", query.host_count.as_str()),
            ("sampleCount", query.sample_count.as_str()),
            ("expression", query.expression.as_str()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .context("Failed to send hung report request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let report = response
            .json::<HungReportResponse>()
            .await
            .context("Failed to parse hung report")?;
        Ok(report)
    }
}
