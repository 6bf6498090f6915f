//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode, PendingAction, Tab};
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('l') => app.clear_activity(),
            _ => {}
        }
        return Ok(());
    }

    // A queued request runs before the next key is read
    if app.is_busy() {
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.close_dialog();
                app.request(PendingAction::DeletePost(id));
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
                app.notify(Notification::info("Delete cancelled"));
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab | KeyCode::Right => {
            app.switch_tab(app.active_tab.next());
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.switch_tab(app.active_tab.previous());
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.switch_tab(Tab::ALL[index]);
            return Ok(());
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus_previous();
            return Ok(());
        }
        KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('e') => {
            app.start_editing();
            return Ok(());
        }
        _ => {}
    }

    match app.active_tab {
        Tab::CreatePost => handle_create_key(app, key),
        Tab::Wizard => handle_wizard_key(app, key),
        Tab::Manage => handle_manage_key(app, key),
        Tab::Users => {
            if key.code == KeyCode::Char('s') {
                app.request(PendingAction::CreateUser);
            }
        }
        Tab::Comment => {
            if key.code == KeyCode::Char('s') {
                app.request(PendingAction::CreateComment);
            }
        }
    }

    Ok(())
}

fn handle_create_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') => app.request(PendingAction::CreatePost),
        KeyCode::Char('x') => app.fill_next_example(),
        KeyCode::Char('u') => app.cycle_user(true),
        KeyCode::Char('U') => app.cycle_user(false),
        _ => {}
    }
}

fn handle_wizard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') => app.wizard_next(),
        KeyCode::Char('p') | KeyCode::Char('b') => app.wizard_back(),
        KeyCode::Char('s') => {
            if app.wizard.renderer().view().nav.submit {
                app.request(PendingAction::WizardSubmit);
            } else {
                app.notify(Notification::info("Submit is available on the review step"));
            }
        }
        _ => {}
    }
}

fn handle_manage_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') => {
            if let Some(id) = app.manage_post_id() {
                app.request(PendingAction::LoadPost(id));
            }
        }
        KeyCode::Char('s') => {
            if let Some(id) = app.manage_post_id() {
                app.request(PendingAction::UpdatePost(id));
            }
        }
        KeyCode::Char('d') => app.confirm_delete(),
        _ => {}
    }
}

/// Handle keys while typing into a field
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        code => {
            if let Some(input) = app.current_form_mut().focused_mut() {
                match code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::session::Session;
    use crate::tui::app::create_fields;
    use crate::wizard::Step;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn session() -> Session {
        Session::in_memory(Settings::default()).unwrap()
    }

    #[test]
    fn test_tab_switching() {
        let session = session();
        let mut app = App::new(&session);

        handle_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.active_tab, Tab::Manage);
        handle_event(&mut app, key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.active_tab, Tab::Wizard);
    }

    #[test]
    fn test_typing_into_create_form() {
        let session = session();
        let mut app = App::new(&session);

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.input_mode, InputMode::Editing);
        type_text(&mut app, "Hello q");
        handle_event(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.create_form.value(create_fields::TITLE), "Hello q");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_wizard_keys() {
        let session = session();
        let mut app = App::new(&session);
        handle_event(&mut app, key(KeyCode::Char('2'))).unwrap();

        handle_event(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert!(!app.is_busy());

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        type_text(&mut app, "Hello");
        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.wizard.current_step(), Step::Content);

        handle_event(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.wizard.current_step(), Step::BasicInfo);
        assert_eq!(app.wizard.form_data().title, "Hello");
    }

    #[test]
    fn test_ctrl_l_clears_panels() {
        let session = session();
        let mut app = App::new(&session);
        session.activity.info("Application initialized");

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(session.activity.is_empty());
    }

    #[test]
    fn test_delete_confirmation() {
        let session = session();
        let mut app = App::new(&session);
        app.switch_tab(Tab::Manage);
        app.manage_form.set(0, "2");

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(app.has_dialog());
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert!(!app.has_dialog());
        assert!(!app.is_busy());

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(app.is_busy());
    }
}
