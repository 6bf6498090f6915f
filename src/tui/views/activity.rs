//! Network log and result panels

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::activity::EntryKind;
use crate::tui::app::App;

fn kind_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Info => Color::Gray,
        EntryKind::Request => Color::Cyan,
        EntryKind::Response => Color::Green,
        EntryKind::Error => Color::Red,
    }
}

/// Render the network log, newest entry first
pub fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Network Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let entries = app.session.activity.entries();
    if entries.is_empty() {
        let text = Paragraph::new("No activity yet")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .take(area.height as usize)
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.format_human_readable(),
                Style::default().fg(kind_color(entry.kind)),
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the latest result
pub fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(record) = app.session.activity.latest_result() else {
        let text = Paragraph::new("No result yet")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    };

    let color = if record.is_error() {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                record.headline(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", record.endpoint),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(record.pretty_data().lines().map(|l| Line::from(l.to_string())));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
