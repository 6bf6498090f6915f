//! Wizard tab
//!
//! Draws from the view last pushed through the render port, so what is shown
//! always matches the controller's state.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, WizardForm};
use crate::tui::layout::WizardLayout;
use crate::wizard::WizardView;

use super::{form_block, render_inputs};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.wizard.renderer().view();

    let block = form_block("Create Post Wizard");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = WizardLayout::new(inner);
    render_header(frame, view, layout.header);

    match &view.preview {
        Some(data) => {
            let lines = vec![
                preview_line("Title", data.title.clone()),
                preview_line("User ID", data.user_id.to_string()),
                Line::from(""),
                Line::from(Span::styled("Body", Style::default().fg(Color::Cyan))),
                Line::from(data.body.as_str()),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }),
                layout.body,
            );
        }
        None => {
            render_inputs(
                frame,
                &app.wizard_form.form,
                WizardForm::visible(view.step),
                app.input_mode,
                layout.body,
            );
        }
    }

    render_nav(frame, view, layout.nav);
}

fn render_header(frame: &mut Frame, view: &WizardView, area: Rect) {
    if area.height < 2 {
        return;
    }

    let labels: Vec<Span> = view
        .labels
        .iter()
        .enumerate()
        .flat_map(|(i, label)| {
            let style = if i + 1 == view.step.number() as usize {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let separator = if i == 0 { "" } else { " > " };
            [Span::raw(separator), Span::styled(*label, style)]
        })
        .collect();

    let text = vec![
        Line::from(Span::styled(
            view.indicator(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(labels),
    ];
    frame.render_widget(
        Paragraph::new(text),
        Rect::new(area.x, area.y, area.width, 2),
    );

    if area.height >= 3 {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .percent(view.percent().min(100));
        frame.render_widget(gauge, Rect::new(area.x, area.y + 2, area.width, 1));
    }
}

fn render_nav(frame: &mut Frame, view: &WizardView, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = Vec::new();
    if view.nav.previous {
        spans.push(Span::styled("p", key));
        spans.push(Span::raw(":Previous  "));
    }
    if view.nav.next {
        spans.push(Span::styled("n", key));
        spans.push(Span::raw(":Next  "));
    }
    if view.nav.submit {
        spans.push(Span::styled("s", key));
        spans.push(Span::raw(":Submit  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn preview_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<8} ", label), Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}
