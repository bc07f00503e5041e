use super::PulseClient;
use super::types::{ClearMetricsResponse, MetricDetail, MetricsResponse};
use anyhow::{Context, Result};

pub(crate) trait MetricsApi {
    async fn get_metrics(&self, sample_name: Option<&str>) -> Result<MetricsResponse>;

    async fn get_metric(&self, name: &str) -> Result<MetricDetail>;

    async fn clear_metrics(&self) -> Result<ClearMetricsResponse>;
}

impl MetricsApi for PulseClient {
    async fn get_metrics(&self, sample_name: Option<&str>) -> Result<MetricsResponse> {
        let mut url = self.endpoint("metrics");

        if let Some(sample) = sample_name {
            url.push_str(&format!("?sampleName={}", sample));
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send metrics request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let metrics = response
            .json::<MetricsResponse>()
            .await
            .context("Failed to parse metrics response")?;
        Ok(metrics)
    }

    async fn get_metric(&self, name: &str) -> Result<MetricDetail> {
        let url = self.endpoint("metric");

        let response = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .context("Failed to send metric detail request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let detail = response
            .json::<MetricDetail>()
            .await
            .context("Failed to parse metric detail")?;
        Ok(detail)
    }

    async fn clear_metrics(&self) -> Result<ClearMetricsResponse> {
        let url = self.endpoint("clearMetrics");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send clear metrics request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let cleared = response
            .json::<ClearMetricsResponse>()
            .await
            .context("Failed to parse clear metrics response")?;
        Ok(cleared)
    }
}
