use crate::api::pulse::types::HostReport;
use crate::app::App;
use crate::common::rows::{CellSpec, RowSpec, Tone};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

pub const NO_REPORTS_MESSAGE: &str = "No host reports returned.";

/// Maps per-host probe results to display rows: host, red/green status, and a
/// notes column folding the probe error and queue statistics together. A host
/// whose report omits the hung flag never answered the probe and counts as
/// hung.
pub fn host_rows(reports: &[HostReport]) -> Vec<RowSpec> {
    if reports.is_empty() {
        return vec![RowSpec::placeholder(NO_REPORTS_MESSAGE)];
    }

    reports
        .iter()
        .map(|report| {
            let healthy = matches!(report.is_hung, Some(false));

            let mut notes: Vec<String> = Vec::new();
            if let Some(error) = &report.error {
                notes.push(error.clone());
            }
            if let Some(backlog) = report.device_backlog {
                notes.push(format!("Backlog: {}", backlog));
            }
            if let Some(dispatched) = report.device_dispatched {
                notes.push(format!("Dispatched: {}", dispatched));
            }

            let note_tone = if report.error.is_some() {
                Tone::Bad
            } else {
                Tone::Plain
            };

            RowSpec::new(vec![
                CellSpec::text(report.host.clone()),
                CellSpec::status(healthy),
                CellSpec::toned(notes.join("  "), note_tone),
            ])
        })
        .collect()
}

pub fn render_hosts(app: &mut App, frame: &mut Frame, area: Rect, block: Block) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // banner of hosts currently flagged hung
    let banner: Line = if app.hung_nodes.is_empty() {
        Line::from(Span::styled("none", Style::default().fg(Color::Green)))
    } else {
        let mut spans = Vec::new();
        for (i, host) in app.hung_nodes.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                host.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(banner)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Hung Hosts")),
        layout[0],
    );

    if let Some(message) = super::placeholder_message(&app.host_rows) {
        frame.render_widget(
            Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            layout[1],
        );
        return;
    }

    let rows: Vec<Row> = app.host_rows.iter().map(super::spec_to_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Length(8),
            Constraint::Percentage(65),
        ],
    )
    .header(
        Row::new(vec!["Host", "Status", "Notes"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ");

    frame.render_stateful_widget(table, layout[1], &mut app.hosts_table_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(host: &str, is_hung: Option<bool>) -> HostReport {
        HostReport {
            host: host.to_string(),
            is_hung,
            error: None,
            device_backlog: None,
            device_dispatched: None,
        }
    }

    #[test]
    fn missing_hung_flag_counts_as_hung() {
        let rows = host_rows(&[report("a", None), report("b", Some(false))]);
        assert_eq!(rows[0].cells[1].tone, Tone::Bad);
        assert_eq!(rows[1].cells[1].tone, Tone::Good);
    }

    #[test]
    fn notes_fold_error_and_queue_stats() {
        let full = HostReport {
            host: "c".to_string(),
            is_hung: Some(true),
            error: Some("probe timed out".to_string()),
            device_backlog: Some(12),
            device_dispatched: Some(300),
        };
        let rows = host_rows(&[full]);
        let notes = &rows[0].cells[2];

        assert!(notes.text.contains("probe timed out"));
        assert!(notes.text.contains("Backlog: 12"));
        assert!(notes.text.contains("Dispatched: 300"));
        assert_eq!(notes.tone, Tone::Bad);
    }

    #[test]
    fn empty_report_list_renders_placeholder() {
        let rows = host_rows(&[]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].placeholder);
    }
}
