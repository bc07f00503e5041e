use crate::api::pulse::types::TestDataResponse;
use crate::app::App;
use crate::common::rows::{CellSpec, RowSpec, label_rows};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Row, Table},
};

pub const NO_DATA_MESSAGE: &str = "No Data Found";

/// Maps the sample-data records to ordinal-labeled rows. A zero count renders
/// the dash/no-data placeholder instead.
pub fn data_rows(response: &TestDataResponse) -> Vec<RowSpec> {
    if response.count == 0 || response.data.is_empty() {
        return vec![RowSpec::placeholder(NO_DATA_MESSAGE)];
    }

    let mut rows: Vec<RowSpec> = response
        .data
        .iter()
        .map(|item| {
            RowSpec::new(vec![
                CellSpec::numeric(item.id.to_string(), item.id as f64),
                CellSpec::text(item.description.clone()),
            ])
        })
        .collect();

    label_rows(&mut rows);
    rows
}

/// Summary shown after a fetch, mirroring the displayed-vs-total framing.
pub fn data_summary(response: &TestDataResponse) -> String {
    format!(
        "Number of records displayed: {}, of total in db: {}",
        response.data.len(),
        response.count
    )
}

pub fn render_data(app: &mut App, frame: &mut Frame, area: Rect, block: Block) {
    if let Some(message) = super::placeholder_message(&app.data_rows) {
        frame.render_widget(
            Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = app.data_rows.iter().map(super::spec_to_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Percentage(80),
        ],
    )
    .header(
        Row::new(vec!["", "Id", "Description"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ");

    frame.render_stateful_widget(table, area, &mut app.data_table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::pulse::types::TestItem;

    fn response(count: i64, items: &[(i64, &str)]) -> TestDataResponse {
        TestDataResponse {
            count,
            data: items
                .iter()
                .map(|(id, description)| TestItem {
                    id: *id,
                    description: description.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn rows_are_labeled_in_order() {
        let rows = data_rows(&response(2, &[(7, "first"), (9, "second")]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0].text, "1.");
        assert_eq!(rows[0].cells[1].text, "7");
        assert_eq!(rows[1].cells[0].text, "2.");
        assert_eq!(rows[1].cells[2].text, "second");
    }

    #[test]
    fn zero_count_renders_no_data_placeholder() {
        let rows = data_rows(&response(0, &[]));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].placeholder);
        assert_eq!(rows[0].cells[0].text, NO_DATA_MESSAGE);
    }

    #[test]
    fn summary_reports_displayed_and_total() {
        let summary = data_summary(&response(40, &[(1, "a"), (2, "b")]));
        assert_eq!(summary, "Number of records displayed: 2, of total in db: 40");
    }
}
