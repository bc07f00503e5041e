use crate::api::pulse::types::MetricRow;
use crate::app::App;
use crate::common::format::{format_duration_ms, with_commas};
use crate::common::rows::{CellSpec, RowSpec, Tone};
use crate::pages::alerts::AlertCountIndex;
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Row, Table},
};

pub const NO_METRICS_MESSAGE: &str = "No metrics found.";

/// Every metric series is padded to this many data cells so the columns line
/// up between stopwatches and bare counters.
const DATA_CELLS: usize = 5;

/// Maps metric samples to display rows. The alert cell is derived from the
/// count index: a known identifier with zero occurrences shows a green
/// marker, a positive count shows red with the count, and identifiers the
/// index has never seen show a dash. The first data value is an invocation
/// count; the rest are millisecond durations, dashed out when the series
/// never ran.
pub fn metric_rows(metrics: &[MetricRow], counts: &AlertCountIndex) -> Vec<RowSpec> {
    if metrics.is_empty() {
        return vec![RowSpec::placeholder(NO_METRICS_MESSAGE)];
    }

    metrics
        .iter()
        .map(|metric| {
            let mut cells = vec![CellSpec::text(metric.name.clone()), alert_cell(metric, counts)];

            let invocations = metric.data.first().copied().unwrap_or(0);
            for (position, &value) in metric.data.iter().take(DATA_CELLS).enumerate() {
                cells.push(data_cell(position, value, invocations));
            }
            for _ in metric.data.len()..DATA_CELLS {
                cells.push(CellSpec::numeric("-", -1.0));
            }

            RowSpec::new(cells)
        })
        .collect()
}

fn alert_cell(metric: &MetricRow, counts: &AlertCountIndex) -> CellSpec {
    match counts.get(metric.name.trim()) {
        Some(0) => CellSpec {
            raw: Some(0.0),
            ..CellSpec::toned("\u{25cf}", Tone::Good)
        },
        Some(count) => CellSpec {
            raw: Some(1.0),
            ..CellSpec::toned(format!("\u{25cf} {}", count), Tone::Bad)
        },
        None => CellSpec::numeric("-", -1.0),
    }
}

fn data_cell(position: usize, value: i64, invocations: i64) -> CellSpec {
    if position == 0 {
        return CellSpec::numeric(with_commas(value), value as f64);
    }
    // durations are meaningless for a series that never ran
    if invocations == 0 {
        return CellSpec::numeric("-", -1.0);
    }
    let (text, unit) = format_duration_ms(value);
    CellSpec {
        text,
        unit,
        tone: Tone::Plain,
        raw: Some(value as f64),
    }
}

/// Key=value entries for the metric detail popup, split from the sample's
/// comma-separated detail string. Name and note entries repeat information
/// already shown in the header, so they are dropped.
pub fn detail_entries(details: &str) -> Vec<(String, String)> {
    details
        .split(',')
        .filter_map(|item| {
            let (key, value) = item.split_once('=')?;
            let key = key.trim();
            if key.contains("name") || key.contains("note") {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

pub fn render_metrics(app: &mut App, frame: &mut Frame, area: Rect, block: Block) {
    if let Some(message) = super::placeholder_message(&app.visible_metric_rows) {
        frame.render_widget(
            Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = app
        .visible_metric_rows
        .iter()
        .map(super::spec_to_row)
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec![
            "Metric", "Alerts", "Count", "Mean", "Min", "Max", "Total",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ");

    frame.render_stateful_widget(table, area, &mut app.metrics_table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::alerts::alert_counts;

    fn metric(name: &str, data: Vec<i64>) -> MetricRow {
        MetricRow {
            name: name.to_string(),
            data,
        }
    }

    #[test]
    fn empty_metrics_render_single_placeholder() {
        let rows = metric_rows(&[], &AlertCountIndex::new());
        assert_eq!(rows.len(), 1);
        assert!(rows[0].placeholder);
        assert_eq!(rows[0].cells[0].text, NO_METRICS_MESSAGE);
    }

    #[test]
    fn alert_cell_reflects_count_index() {
        let counts = alert_counts(["quiet"], &[]);
        let rows = metric_rows(
            &[metric("quiet", vec![5, 100]), metric("unknown", vec![5, 100])],
            &counts,
        );

        // known id with zero alerts: green marker sorting before alerting rows
        assert_eq!(rows[0].cells[1].tone, Tone::Good);
        assert_eq!(rows[0].cells[1].raw, Some(0.0));
        // id the index has never seen: dash
        assert_eq!(rows[1].cells[1].text, "-");
        assert_eq!(rows[1].cells[1].raw, Some(-1.0));
    }

    #[test]
    fn alerting_metric_shows_count_in_red() {
        let mut counts = AlertCountIndex::new();
        counts.insert("busy".to_string(), 3);
        let rows = metric_rows(&[metric("busy", vec![5, 100])], &counts);

        assert_eq!(rows[0].cells[1].tone, Tone::Bad);
        assert!(rows[0].cells[1].text.ends_with("3"));
        assert_eq!(rows[0].cells[1].raw, Some(1.0));
    }

    #[test]
    fn first_value_is_a_count_and_durations_follow() {
        let counts = AlertCountIndex::new();
        let rows = metric_rows(&[metric("m", vec![1200, 90_000, 500, 3_600_000, -1])], &counts);
        let cells = &rows[0].cells;

        assert_eq!(cells[2].text, "1,200");
        assert_eq!(cells[2].unit, None);
        assert_eq!((cells[3].text.as_str(), cells[3].unit), ("1.5", Some("min")));
        assert_eq!((cells[4].text.as_str(), cells[4].unit), ("500", Some("ms")));
        assert_eq!((cells[5].text.as_str(), cells[5].unit), ("1.0", Some("hrs")));
        assert_eq!(cells[6].text, "-");
    }

    #[test]
    fn zero_invocation_series_dashes_its_durations() {
        let counts = AlertCountIndex::new();
        let rows = metric_rows(&[metric("idle", vec![0, 250, 250, 250, 250])], &counts);
        let cells = &rows[0].cells;

        assert_eq!(cells[2].text, "0");
        for cell in &cells[3..7] {
            assert_eq!(cell.text, "-");
            assert_eq!(cell.raw, Some(-1.0));
        }
    }

    #[test]
    fn counter_series_pads_to_full_width() {
        let counts = AlertCountIndex::new();
        let rows = metric_rows(&[metric("counter", vec![42])], &counts);
        let cells = &rows[0].cells;

        assert_eq!(cells.len(), 2 + DATA_CELLS);
        assert_eq!(cells[2].text, "42");
        for cell in &cells[3..] {
            assert_eq!(cell.text, "-");
        }
    }

    #[test]
    fn detail_entries_drop_name_and_note_keys() {
        let entries =
            detail_entries("name=http.get, counter=12, note=skipped, mean=40, max=900");
        assert_eq!(
            entries,
            vec![
                ("counter".to_string(), "12".to_string()),
                ("mean".to_string(), "40".to_string()),
                ("max".to_string(), "900".to_string()),
            ]
        );
    }
}
