//! TUI Views module
//!
//! Contains the tab bar, the per-tab forms, the wizard, the network log and
//! result panels, and the status bar.

pub mod activity;
pub mod forms;
pub mod status_bar;
pub mod tabs;
pub mod wizard;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::app::{ActiveDialog, App, Form, InputMode, Tab};
use super::dialogs;
use super::layout::{toast_area, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    tabs::render(frame, app, layout.tabs);

    match app.active_tab {
        Tab::CreatePost => forms::render_create(frame, app, layout.form),
        Tab::Wizard => wizard::render(frame, app, layout.form),
        Tab::Manage => forms::render_manage(frame, app, layout.form),
        Tab::Users => forms::render_users(frame, app, layout.form),
        Tab::Comment => forms::render_comment(frame, app, layout.form),
    }

    activity::render_log(frame, app, layout.log);
    activity::render_result(frame, app, layout.result);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(NotificationWidget::new(notification), toast_area(frame.area()));
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::render(
            frame,
            "Delete Post",
            &format!("Delete post {}? This cannot be undone.", id),
        ),
        ActiveDialog::None => {}
    }
}

/// Bordered block for the form panel
pub(crate) fn form_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Draw the given inputs of a form, one per row, starting at `area`'s top
///
/// Returns the number of rows used.
pub(crate) fn render_inputs(
    frame: &mut Frame,
    form: &Form,
    indices: &[usize],
    mode: InputMode,
    area: Rect,
) -> u16 {
    let mut row = 0;
    for &index in indices {
        if row >= area.height {
            break;
        }
        let Some(input) = form.inputs.get(index) else {
            continue;
        };
        let focused = form.focus == index;
        let widget = input
            .clone()
            .focused(focused)
            .editing(focused && mode == InputMode::Editing);
        frame.render_widget(widget, Rect::new(area.x, area.y + row, area.width, 1));
        row += 2;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::session::Session;
    use crate::tui::app::WizardForm;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_tab_renders() {
        let session = Session::in_memory(Settings::default()).unwrap();
        let mut app = App::new(&session);
        for tab in Tab::ALL {
            app.switch_tab(tab);
            let content = draw(&app, 120, 40);
            assert!(content.contains("Network Log"));
        }
    }

    #[test]
    fn test_wizard_tab_shows_step() {
        let session = Session::in_memory(Settings::default()).unwrap();
        let mut app = App::new(&session);
        app.switch_tab(Tab::Wizard);

        let content = draw(&app, 120, 40);
        assert!(content.contains("Step 1 of 3: Basic Info"));

        app.wizard_form.form.set(WizardForm::TITLE, "Hello");
        app.wizard_next();
        let content = draw(&app, 120, 40);
        assert!(content.contains("Step 2 of 3: Content"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let session = Session::in_memory(Settings::default()).unwrap();
        let mut app = App::new(&session);
        app.open_dialog(ActiveDialog::Help);
        draw(&app, 20, 6);
    }
}
