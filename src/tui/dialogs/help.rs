//! Help dialog
//!
//! Global keys plus the keys of the active tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Tab};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_tab))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(tab: Tab) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Show this help"),
        key_line("1-5 / Tab", "Switch tab"),
        key_line("j/k", "Move between fields"),
        key_line("Enter / i", "Edit the focused field"),
        key_line("Esc", "Stop editing"),
        key_line("Ctrl+L", "Clear log and result panels"),
        Line::from(""),
        heading(tab.title()),
        Line::from(""),
    ];

    let tab_keys: &[(&str, &str)] = match tab {
        Tab::CreatePost => &[
            ("s", "Create post"),
            ("x", "Fill with the next example"),
            ("u / U", "Next / previous user"),
        ],
        Tab::Wizard => &[
            ("n", "Validate step and continue"),
            ("p / b", "Previous step"),
            ("s", "Submit (review step only)"),
        ],
        Tab::Manage => &[
            ("l", "Load post by ID"),
            ("s", "Save changes"),
            ("d", "Delete post"),
        ],
        Tab::Users => &[("s", "Create user")],
        Tab::Comment => &[("s", "Add comment")],
    };
    lines.extend(tab_keys.iter().map(|(key, desc)| key_line(key, desc)));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
