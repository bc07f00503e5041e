use crate::app::{App, InputMode, Tab};
use crate::common::utils::refreshed_label;
use crate::pages;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4), Constraint::Min(0)])
        .split(frame.area());

    render_header(app, frame, layout[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(content_title(app));

    match app.tab {
        Tab::Alerts => pages::alerts::render_alerts(app, frame, layout[1], block),
        Tab::Metrics => pages::metrics::render_metrics(app, frame, layout[1], block),
        Tab::Hosts => pages::hosts::render_hosts(app, frame, layout[1], block),
        Tab::Data => pages::data::render_data(app, frame, layout[1], block),
    }

    // popups stack on top of the tab content, notice always last
    if app.form.is_some() {
        pages::popups::render_form(app, frame);
    }
    if app.user_info.is_some() {
        pages::popups::render_user_info(app, frame);
    }
    if app.metric_detail.is_some() {
        pages::popups::render_metric_detail(app, frame);
    }
    if app.notice.is_some() {
        pages::popups::render_notice(app, frame);
    }
}

fn content_title(app: &App) -> String {
    match app.tab {
        Tab::Metrics => {
            if app.input == InputMode::Filter {
                format!("Metrics | filter: {}_", app.metric_filter)
            } else if !app.metric_filter.is_empty() {
                format!("Metrics | filter: {}", app.metric_filter)
            } else {
                "Metrics".to_string()
            }
        }
        Tab::Alerts => format!("Alerts | last {} hours", app.hours),
        Tab::Hosts => "Host Reports".to_string(),
        Tab::Data => "Sample Data".to_string(),
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut tabs: Vec<Span> = vec![Span::styled(
        "Pulse Console",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        tabs.push(Span::raw("  "));
        let label = format!("[{}] {}", i + 1, tab.title());
        if *tab == app.tab {
            tabs.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            tabs.push(Span::raw(label));
        }
    }
    if let Some(health) = &app.health {
        tabs.push(Span::raw("  "));
        tabs.push(if health.is_healthy {
            Span::styled("\u{25cf} healthy", Style::default().fg(Color::Green))
        } else {
            Span::styled("\u{25cf} unhealthy", Style::default().fg(Color::Red))
        });
        if let Some(collected) = &health.last_collected {
            tabs.push(Span::styled(
                format!(" (collected {})", collected),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let hints = match app.tab {
        Tab::Alerts => "'r': refresh | 'h': hours | 'j/k': move | 's/S': sort | 'u': user | 'q': quit",
        Tab::Metrics => {
            "'r': refresh | '/': filter | 'c': clear | 'R': restart sample | 't': toggle | 'Enter': detail"
        }
        Tab::Hosts => "'r': run query | 'e': edit query | 'j/k': move | 's/S': sort | 'q': quit",
        Tab::Data => "'g': load data | 'd': db probe | 'T': server time | 'q': quit",
    };

    let mut status: Vec<Span> = vec![
        Span::raw(hints),
        Span::styled(
            format!("  refreshed: {}", refreshed_label(app.refreshed_at)),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if app.is_loading {
        status.push(Span::styled(
            "  loading...",
            Style::default().fg(Color::Yellow),
        ));
    }
    if app.filter_debounce.pending() {
        status.push(Span::styled(
            "  filtering...",
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some((message, _)) = &app.flash {
        status.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Cyan),
        ));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(tabs), Line::from(status)])
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
