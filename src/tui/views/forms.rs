//! Form views for the create, manage, users and comment tabs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

use super::{form_block, render_inputs};

/// Render the create post form with the user selection list
pub fn render_create(frame: &mut Frame, app: &App, area: Rect) {
    let block = form_block("Create Post");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indices: Vec<usize> = (0..app.create_form.inputs.len()).collect();
    let used = render_inputs(frame, &app.create_form, &indices, app.input_mode, inner);

    let selected = app.session.users.selected();
    let users: Vec<Span> = app
        .session
        .users
        .options()
        .into_iter()
        .flat_map(|option| {
            let style = if option.id == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            [
                Span::styled(format!("{}:{}", option.id, option.label), style),
                Span::raw("  "),
            ]
        })
        .collect();

    let mut lines = vec![Line::from(Span::styled(
        "Users (u/U to cycle)",
        Style::default().fg(Color::DarkGray),
    ))];
    lines.push(Line::from(users));
    if let Some(example) = app.example {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Example: {} (x for next)", example.contents().0),
            Style::default().fg(Color::DarkGray),
        )));
    }

    render_footer(frame, inner, used, lines);
}

/// Render the load/update/delete form
pub fn render_manage(frame: &mut Frame, app: &App, area: Rect) {
    let block = form_block("Manage Post");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indices: Vec<usize> = (0..app.manage_form.inputs.len()).collect();
    let used = render_inputs(frame, &app.manage_form, &indices, app.input_mode, inner);

    let loaded = match &app.loaded_post {
        Some(post) => Line::from(Span::styled(
            format!("Loaded post {} by user {}", post.id, post.user_id),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            "No post loaded (l to load)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    render_footer(frame, inner, used, vec![loaded]);
}

/// Render the create user form and the selection list it feeds
pub fn render_users(frame: &mut Frame, app: &App, area: Rect) {
    let block = form_block("Create User");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indices: Vec<usize> = (0..app.user_form.inputs.len()).collect();
    let used = render_inputs(frame, &app.user_form, &indices, app.input_mode, inner);

    let mut lines = vec![Line::from(Span::styled(
        "Selection list",
        Style::default().fg(Color::DarkGray),
    ))];
    lines.extend(app.session.users.options().into_iter().map(|option| {
        Line::from(vec![
            Span::styled(format!("{:>4} ", option.id.get()), Style::default().fg(Color::Cyan)),
            Span::raw(option.label),
        ])
    }));

    render_footer(frame, inner, used, lines);
}

/// Render the add comment form
pub fn render_comment(frame: &mut Frame, app: &App, area: Rect) {
    let block = form_block("Add Comment");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indices: Vec<usize> = (0..app.comment_form.inputs.len()).collect();
    render_inputs(frame, &app.comment_form, &indices, app.input_mode, inner);
}

fn render_footer(frame: &mut Frame, inner: Rect, used: u16, lines: Vec<Line>) {
    if used >= inner.height {
        return;
    }
    let area = Rect::new(inner.x, inner.y + used, inner.width, inner.height - used);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
