pub mod alerts;
pub mod data;
pub mod hosts;
pub mod metrics;
pub mod popups;

use crate::common::rows::{CellSpec, RowSpec, Tone};
use ratatui::{
    prelude::*,
    widgets::{Cell, Row},
};

/// A lone placeholder row stands in for the whole table; the renderers show
/// its message across the full width instead of inside the first column.
pub(crate) fn placeholder_message(rows: &[RowSpec]) -> Option<&str> {
    match rows {
        [row] if row.placeholder => row.cells.first().map(|cell| cell.text.as_str()),
        _ => None,
    }
}

/// Interprets a declarative row description into a ratatui row. The builders
/// stay renderer-free; this is the single place tones and units become styles.
pub(crate) fn spec_to_row(spec: &RowSpec) -> Row<'static> {
    Row::new(spec.cells.iter().map(spec_to_cell).collect::<Vec<_>>())
}

fn spec_to_cell(cell: &CellSpec) -> Cell<'static> {
    let style = match cell.tone {
        Tone::Plain => Style::default(),
        Tone::Good => Style::default().fg(Color::Green),
        Tone::Bad => Style::default().fg(Color::Red),
        Tone::Muted => Style::default().fg(Color::DarkGray),
    };

    match cell.unit {
        Some(unit) => Cell::from(Line::from(vec![
            Span::styled(cell.text.clone(), style),
            Span::styled(unit, Style::default().fg(Color::DarkGray)),
        ])),
        None => Cell::from(Span::styled(cell.text.clone(), style)),
    }
}
