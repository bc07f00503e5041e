use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlertReport {
    pub triggered: Vec<TriggeredAlert>,
    pub test_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredAlert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub host: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
    /// Server-formatted display time; `ts` carries the raw epoch millis.
    pub time: String,
    pub ts: i64,
    /// Number of occurrences folded into this entry by throttling.
    pub count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub health_report: HealthReport,
    pub rows: Vec<MetricRow>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub is_healthy: bool,
    pub last_collected: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    pub name: String,
    /// Count followed by mean/min/max/total millis; counters send only the
    /// count.
    pub data: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetricDetail {
    pub name: String,
    pub first_usage: Option<String>,
    pub last_usage: Option<String>,
    pub max_time_stamp: Option<String>,
    /// Comma-separated key=value pairs, split client-side.
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClearMetricsResponse {
    pub num_stops: i64,
    pub num_counters: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HungReportResponse {
    pub hung_nodes: Vec<String>,
    pub hung_reports: Vec<HostReport>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HostReport {
    pub host: String,
    /// Absent means the probe never answered; treated as hung.
    pub is_hung: Option<bool>,
    pub error: Option<String>,
    pub device_backlog: Option<i64>,
    pub device_dispatched: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestDataResponse {
    pub count: i64,
    pub data: Vec<TestItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestItem {
    pub id: i64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_report_decodes_camel_case() {
        let json = r#"{
            "testCount": 2,
            "triggered": [
                {
                    "id": "service.jobs.backlog",
                    "type": "occurrences-max",
                    "host": "host-7",
                    "service": "worker",
                    "description": "limit exceeded",
                    "time": "10:01:02 , Aug 6",
                    "ts": 1754450462000,
                    "count": 3
                }
            ]
        }"#;
        let report: AlertReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.test_count, Some(2));
        assert_eq!(report.triggered.len(), 1);
        let alert = &report.triggered[0];
        assert_eq!(alert.id, "service.jobs.backlog");
        assert_eq!(alert.kind, "occurrences-max");
        assert_eq!(alert.count, Some(3));
    }

    #[test]
    fn metrics_response_allows_counter_only_rows() {
        let json = r#"{
            "healthReport": { "isHealthy": false, "lastCollected": "10:05:00" },
            "rows": [
                { "name": "http.get", "data": [120, 35, 1, 900, 4200] },
                { "name": "jobs.completed", "data": [9] }
            ]
        }"#;
        let response: MetricsResponse = serde_json::from_str(json).unwrap();
        assert!(!response.health_report.is_healthy);
        assert_eq!(response.rows[0].data.len(), 5);
        assert_eq!(response.rows[1].data, vec![9]);
    }

    #[test]
    fn hung_report_tolerates_missing_probe_fields() {
        let json = r#"{
            "hungNodes": ["host-3"],
            "hungReports": [
                { "host": "host-3", "error": "no response" },
                { "host": "host-4", "isHung": false,
                  "deviceBacklog": 12, "deviceDispatched": 40 }
            ]
        }"#;
        let response: HungReportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.hung_nodes, vec!["host-3"]);
        assert_eq!(response.hung_reports[0].is_hung, None);
        assert_eq!(response.hung_reports[1].device_backlog, Some(12));
    }
}
