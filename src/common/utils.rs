use chrono::{DateTime, Local};
use ratatui::prelude::*;

/// Calculates a centered rectangle of a given percentage size within another
/// Rect. Used to place popups/notices in the middle of the screen.
///
/// # Arguments
/// * `percent_x` - Horizontal percentage of the screen the rect should occupy.
/// * `percent_y` - Vertical percentage of the screen the rect should occupy.
/// * `r` - The parent Rect (usually the full frame area).
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let hor_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    hor_layout[1]
}

/// Clock-style stamp for the status line, e.g. "14:02:37".
pub fn refreshed_label(at: Option<DateTime<Local>>) -> String {
    match at {
        Some(at) => at.format("%H:%M:%S").to_string(),
        None => "never".to_string(),
    }
}
