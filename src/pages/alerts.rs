use crate::api::pulse::types::TriggeredAlert;
use crate::app::App;
use crate::common::rows::{CellSpec, RowSpec, Tone};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Row, Table},
};
use std::collections::BTreeMap;

/// Aggregate entry tracking whether the report cycle itself produced alerts.
pub const HEALTH_REPORT_ID: &str = "health.report.fail";

pub const NO_ALERTS_MESSAGE: &str = "No alerts found. Adjust filters as needed.";

/// Occurrence counters per alert identifier, rebuilt from scratch on every
/// alert refresh and consumed by the metric rows for status styling.
pub type AlertCountIndex = BTreeMap<String, u64>;

/// Computes a fresh count index: every known identifier starts at zero, each
/// triggered alert increments its identifier, and the aggregate entry is set
/// to the total. Always returns a new map; counts never carry over between
/// cycles.
pub fn alert_counts<'a>(
    known_ids: impl IntoIterator<Item = &'a str>,
    alerts: &[TriggeredAlert],
) -> AlertCountIndex {
    let mut counts: AlertCountIndex = known_ids
        .into_iter()
        .map(|id| (id.trim().to_string(), 0))
        .collect();

    for alert in alerts {
        *counts.entry(alert.id.trim().to_string()).or_insert(0) += 1;
    }

    counts.insert(HEALTH_REPORT_ID.to_string(), alerts.len() as u64);
    counts
}

/// Maps the triggered alerts to display rows, in response order. Throttled
/// entries carry their folded occurrence count in the description.
pub fn alert_rows(alerts: &[TriggeredAlert]) -> Vec<RowSpec> {
    if alerts.is_empty() {
        return vec![RowSpec::placeholder(NO_ALERTS_MESSAGE)];
    }

    alerts
        .iter()
        .map(|alert| {
            let mut description = alert.description.clone().unwrap_or_default();
            if let Some(count) = alert.count
                && count > 1
            {
                description.push_str(&format!("  (throttled: {})", count));
            }

            let mut source = alert.host.clone().unwrap_or_default();
            if let Some(service) = &alert.service {
                if source.is_empty() {
                    source = service.clone();
                } else {
                    source.push_str(&format!(" ({})", service));
                }
            }

            RowSpec::new(vec![
                CellSpec::numeric(alert.time.clone(), alert.ts as f64),
                CellSpec::toned(alert.id.clone(), Tone::Bad),
                CellSpec::text(source),
                CellSpec::text(alert.kind.clone()),
                CellSpec::text(description),
            ])
        })
        .collect()
}

pub fn render_alerts(app: &mut App, frame: &mut Frame, area: Rect, block: Block) {
    if let Some(message) = super::placeholder_message(&app.alert_rows) {
        frame.render_widget(
            Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = app.alert_rows.iter().map(super::spec_to_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Length(16),
            Constraint::Percentage(40),
        ],
    )
    .header(
        Row::new(vec!["Time", "Alert", "Source", "Type", "Description"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ");

    frame.render_stateful_widget(table, area, &mut app.alerts_table_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, ts: i64, count: Option<i64>) -> TriggeredAlert {
        TriggeredAlert {
            id: id.to_string(),
            kind: "occurrences-max".to_string(),
            host: Some("host-1".to_string()),
            service: Some("svc".to_string()),
            description: Some("limit exceeded".to_string()),
            time: "10:00:00 , Aug 6".to_string(),
            ts,
            count,
        }
    }

    #[test]
    fn counts_zero_known_ids_then_increment() {
        let alerts = vec![alert("a", 1, None), alert("a", 2, None), alert("b", 3, None)];
        let counts = alert_counts(["a", "b", "stale.id"], &alerts);

        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.get("stale.id"), Some(&0));
        assert_eq!(counts.get(HEALTH_REPORT_ID), Some(&3));
    }

    #[test]
    fn empty_report_zeroes_everything() {
        let counts = alert_counts(["a", "b"], &[]);
        assert!(counts.values().all(|&c| c == 0));
        assert_eq!(counts.get(HEALTH_REPORT_ID), Some(&0));
    }

    #[test]
    fn empty_report_renders_single_placeholder() {
        let rows = alert_rows(&[]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].placeholder);
        assert_eq!(rows[0].cells[0].text, NO_ALERTS_MESSAGE);
    }

    #[test]
    fn rows_follow_response_order_and_carry_raw_timestamps() {
        let alerts = vec![alert("b", 200, None), alert("a", 100, Some(4))];
        let rows = alert_rows(&alerts);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[1].text, "b");
        assert_eq!(rows[0].cells[0].raw, Some(200.0));
        assert_eq!(rows[0].cells[2].text, "host-1 (svc)");
        assert_eq!(rows[1].cells[1].text, "a");
        assert!(rows[1].cells[4].text.contains("throttled: 4"));
    }

    #[test]
    fn rendering_twice_replaces_rather_than_accumulates() {
        let alerts = vec![alert("a", 1, None)];
        let first = alert_rows(&alerts);
        let second = alert_rows(&alerts);
        assert_eq!(first, second);
    }
}
