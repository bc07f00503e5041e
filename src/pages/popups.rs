use crate::app::{App, NoticeKind};
use crate::common::utils::centered_rect;
use crate::pages::metrics::detail_entries;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

pub fn render_notice(app: &App, frame: &mut Frame) {
    let Some(notice) = &app.notice else {
        return;
    };

    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let border = match notice.kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(notice.title.clone())
        .border_style(Style::default().fg(border));

    let mut text: Vec<Line> = notice
        .body
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Esc: dismiss",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

pub fn render_metric_detail(app: &App, frame: &mut Frame) {
    let Some(detail) = &app.metric_detail else {
        return;
    };

    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Metric: {}", detail.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(inner);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = vec![
        Line::from(vec![
            Span::styled("First used: ", bold),
            Span::raw(detail.first_usage.as_deref().unwrap_or("N/A")),
        ]),
        Line::from(vec![
            Span::styled("Last used: ", bold),
            Span::raw(detail.last_usage.as_deref().unwrap_or("N/A")),
        ]),
        Line::from(vec![
            Span::styled("Max at: ", bold),
            Span::raw(detail.max_time_stamp.as_deref().unwrap_or("N/A")),
        ]),
        Line::from(Span::styled(
            "Esc: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    let rows: Vec<Row> = detail_entries(&detail.details)
        .into_iter()
        .map(|(key, value)| Row::new(vec![Cell::from(key), Cell::from(value)]))
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Percentage(40), Constraint::Percentage(60)],
    )
    .header(Row::new(vec!["Sample", "Value"]).style(bold));

    frame.render_widget(table, layout[1]);
}

pub fn render_user_info(app: &App, frame: &mut Frame) {
    let Some(user) = &app.user_info else {
        return;
    };

    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let field = |label: &'static str, value: &Option<String>| {
        Line::from(vec![
            Span::styled(label, bold),
            Span::raw(value.as_deref().unwrap_or("N/A").to_string()),
        ])
    };

    let text = vec![
        field("Name: ", &user.full_name),
        field("Title: ", &user.title),
        Line::from(vec![Span::styled("Userid: ", bold), Span::raw(user.userid.clone())]),
        field("Email: ", &user.mail),
        field("Phone: ", &user.telephone_number),
        field("Type: ", &user.employee_type),
        field("Manager: ", &user.manager),
        field("Location: ", &user.location),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Directory Lookup");
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_form(app: &App, frame: &mut Frame) {
    let Some(form) = &app.form else {
        return;
    };

    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(form.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> =
        form.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let style = if i == form.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let shown = if field.masked {
            "*".repeat(field.buffer.chars().count())
        } else {
            field.buffer.clone()
        };
        let input = Paragraph::new(shown).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label)
                .style(style),
        );
        frame.render_widget(input, layout[i]);
    }

    let instructions = Paragraph::new("Tab: switch field | Enter: submit | Esc: cancel")
        .alignment(Alignment::Center);
    frame.render_widget(instructions, layout[form.fields.len()]);
}
