//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::models::{Post, PostExample, PostId, UserId};
use crate::services::SessionSubmitter;
use crate::session::Session;
use crate::wizard::{FieldId, FieldSource, Step, WizardController};

use super::widgets::{Notification, NotificationQueue, TextInput};
use super::wizard_port::TuiRenderer;

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    CreatePost,
    Wizard,
    Manage,
    Users,
    Comment,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::CreatePost,
        Tab::Wizard,
        Tab::Manage,
        Tab::Users,
        Tab::Comment,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::CreatePost => "Create Post",
            Self::Wizard => "Wizard",
            Self::Manage => "Manage",
            Self::Users => "Users",
            Self::Comment => "Comment",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(PostId),
}

/// A request queued by a key press, run after the busy status is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    CreatePost,
    LoadPost(PostId),
    UpdatePost(PostId),
    DeletePost(PostId),
    CreateUser,
    CreateComment,
    WizardSubmit,
}

impl PendingAction {
    pub fn busy_message(&self) -> String {
        match self {
            Self::CreatePost => "Creating post...".into(),
            Self::LoadPost(id) => format!("Loading post {}...", id),
            Self::UpdatePost(id) => format!("Updating post {}...", id),
            Self::DeletePost(id) => format!("Deleting post {}...", id),
            Self::CreateUser => "Creating user...".into(),
            Self::CreateComment => "Adding comment...".into(),
            Self::WizardSubmit => "Submitting wizard post...".into(),
        }
    }
}

/// A column of text inputs with one focused
#[derive(Debug, Clone)]
pub struct Form {
    pub inputs: Vec<TextInput>,
    pub focus: usize,
}

impl Form {
    pub fn new(inputs: Vec<TextInput>) -> Self {
        Self { inputs, focus: 0 }
    }

    pub fn value(&self, index: usize) -> &str {
        self.inputs.get(index).map(TextInput::value).unwrap_or("")
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(input) = self.inputs.get_mut(index) {
            input.set(value);
        }
    }

    pub fn focused_mut(&mut self) -> Option<&mut TextInput> {
        self.inputs.get_mut(self.focus)
    }

    /// Move focus within `allowed`, wrapping around
    pub fn cycle_focus(&mut self, allowed: &[usize], forward: bool) {
        if allowed.is_empty() {
            return;
        }
        let len = allowed.len();
        let next = match allowed.iter().position(|&i| i == self.focus) {
            Some(pos) if forward => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            None => 0,
        };
        self.focus = allowed[next];
    }

    pub fn clear(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
        self.focus = 0;
    }
}

/// Field indices of the create form
pub mod create_fields {
    pub const TITLE: usize = 0;
    pub const BODY: usize = 1;
    pub const USER_ID: usize = 2;
    pub const ATTACHMENT: usize = 3;
}

/// Field indices of the manage form
pub mod manage_fields {
    pub const POST_ID: usize = 0;
    pub const TITLE: usize = 1;
    pub const BODY: usize = 2;
}

/// Field indices of the user form
pub mod user_fields {
    pub const NAME: usize = 0;
    pub const USERNAME: usize = 1;
    pub const EMAIL: usize = 2;
    pub const PHONE: usize = 3;
    pub const WEBSITE: usize = 4;
}

/// Field indices of the comment form
pub mod comment_fields {
    pub const POST_ID: usize = 0;
    pub const BODY: usize = 1;
}

/// The wizard's inputs; only the active step's fields are shown
#[derive(Debug, Clone)]
pub struct WizardForm {
    pub form: Form,
}

impl WizardForm {
    pub const TITLE: usize = 0;
    pub const USER_ID: usize = 1;
    pub const BODY: usize = 2;

    /// Inputs with `user_id` preselected
    pub fn new(user_id: UserId) -> Self {
        Self {
            form: Form::new(vec![
                TextInput::new().label("Title").placeholder("at least 3 characters"),
                TextInput::new().label("User ID").content(user_id.get().to_string()),
                TextInput::new().label("Body").placeholder("at least 10 characters"),
            ]),
        }
    }

    /// Inputs belonging to a step
    pub fn visible(step: Step) -> &'static [usize] {
        match step {
            Step::BasicInfo => &[Self::TITLE, Self::USER_ID],
            Step::Content => &[Self::BODY],
            Step::Review => &[],
        }
    }

    /// Focus the first input of a step
    pub fn focus_step(&mut self, step: Step) {
        if let Some(&first) = Self::visible(step).first() {
            self.form.focus = first;
        }
    }

    /// Clear title and body after a successful submission; the author stays
    pub fn reset(&mut self) {
        self.form.set(Self::TITLE, "");
        self.form.set(Self::BODY, "");
        self.form.focus = Self::TITLE;
    }

    pub fn set_user(&mut self, user_id: UserId) {
        self.form.set(Self::USER_ID, user_id.get().to_string());
    }
}

impl FieldSource for WizardForm {
    fn field(&self, id: FieldId) -> String {
        let index = match id {
            FieldId::Title => Self::TITLE,
            FieldId::UserId => Self::USER_ID,
            FieldId::Body => Self::BODY,
        };
        self.form.value(index).to_string()
    }
}

/// Main application state
pub struct App<'a> {
    pub session: &'a Session,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_tab: Tab,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    pub create_form: Form,
    pub manage_form: Form,
    pub user_form: Form,
    pub comment_form: Form,
    pub wizard_form: WizardForm,

    /// The wizard instance owned by this app
    pub wizard: WizardController<SessionSubmitter<'a>, TuiRenderer<'a>>,

    /// Last example used to fill the create form
    pub example: Option<PostExample>,

    /// Post loaded into the manage form, for change summaries
    pub loaded_post: Option<Post>,

    /// Request waiting to run after the next draw
    pub pending: Option<PendingAction>,

    /// Status message to display
    pub status_message: Option<String>,

    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    pub fn new(session: &'a Session) -> Self {
        let selected = session.users.selected();

        let mut wizard = WizardController::new(
            SessionSubmitter::new(session),
            TuiRenderer::new(&session.activity),
        );
        wizard.refresh();

        Self {
            session,
            should_quit: false,
            active_tab: Tab::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            create_form: Form::new(vec![
                TextInput::new().label("Title").placeholder("at least 3 characters"),
                TextInput::new().label("Body").placeholder("at least 10 characters"),
                TextInput::new()
                    .label("User ID")
                    .content(selected.get().to_string()),
                TextInput::new()
                    .label("Attachment")
                    .placeholder("optional image path (max 1MB)"),
            ]),
            manage_form: Form::new(vec![
                TextInput::new().label("Post ID").placeholder("e.g. 1"),
                TextInput::new().label("Title"),
                TextInput::new().label("Body"),
            ]),
            user_form: Form::new(vec![
                TextInput::new().label("Name").placeholder("required"),
                TextInput::new().label("Username").placeholder("required, unique"),
                TextInput::new().label("Email").placeholder("required"),
                TextInput::new().label("Phone"),
                TextInput::new().label("Website").placeholder("unique"),
            ]),
            comment_form: Form::new(vec![
                TextInput::new().label("Post ID").content("1"),
                TextInput::new().label("Comment"),
            ]),
            wizard_form: WizardForm::new(selected),
            wizard,
            example: None,
            loaded_post: None,
            pending: None,
            status_message: None,
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
    }

    /// Form of the active tab
    pub fn current_form_mut(&mut self) -> &mut Form {
        match self.active_tab {
            Tab::CreatePost => &mut self.create_form,
            Tab::Wizard => &mut self.wizard_form.form,
            Tab::Manage => &mut self.manage_form,
            Tab::Users => &mut self.user_form,
            Tab::Comment => &mut self.comment_form,
        }
    }

    /// Inputs that can take focus on the active tab
    pub fn focusable(&self) -> Vec<usize> {
        let count = match self.active_tab {
            Tab::CreatePost => self.create_form.inputs.len(),
            Tab::Wizard => return WizardForm::visible(self.wizard.current_step()).to_vec(),
            Tab::Manage => self.manage_form.inputs.len(),
            Tab::Users => self.user_form.inputs.len(),
            Tab::Comment => self.comment_form.inputs.len(),
        };
        (0..count).collect()
    }

    pub fn focus_next(&mut self) {
        let allowed = self.focusable();
        self.current_form_mut().cycle_focus(&allowed, true);
    }

    pub fn focus_previous(&mut self) {
        let allowed = self.focusable();
        self.current_form_mut().cycle_focus(&allowed, false);
    }

    /// Start typing into the focused input, if the tab has any
    pub fn start_editing(&mut self) {
        if !self.focusable().is_empty() {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        self.input_mode = InputMode::Normal;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Queue a request and show it as busy until it has run
    pub fn request(&mut self, action: PendingAction) {
        self.set_status(action.busy_message());
        self.pending = Some(action);
    }

    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Empty the network log and result panel
    pub fn clear_activity(&mut self) {
        self.session.activity.clear();
        self.notify(Notification::info("Panels cleared"));
    }

    /// Fill the create form with the next example
    pub fn fill_next_example(&mut self) {
        let example = match self.example {
            None => PostExample::Pokemon,
            Some(PostExample::Pokemon) => PostExample::Recipe,
            Some(PostExample::Recipe) => PostExample::Travel,
            Some(PostExample::Travel) => PostExample::Pokemon,
        };
        let (title, body) = example.contents();
        self.create_form.set(create_fields::TITLE, title);
        self.create_form.set(create_fields::BODY, body);
        self.example = Some(example);
        self.session
            .activity
            .info(format!("Filled form with example \"{}\"", title));
    }

    /// Select the next user and put it in the create form
    pub fn cycle_user(&mut self, forward: bool) {
        let id = self.session.users.cycle(forward);
        self.create_form.set(create_fields::USER_ID, id.get().to_string());
    }

    /// Move toasts reported by the wizard into the queue and refocus
    pub fn sync_wizard(&mut self) {
        for notification in self.wizard.renderer_mut().take_notifications() {
            self.notifications.push(notification);
        }
        let step = self.wizard.current_step();
        if !WizardForm::visible(step).contains(&self.wizard_form.form.focus) {
            self.wizard_form.focus_step(step);
        }
    }

    /// Validate the wizard's step and move forward
    pub fn wizard_next(&mut self) {
        // Failures are reported through the renderer
        let _ = self.wizard.advance(&self.wizard_form);
        self.wizard_form.focus_step(self.wizard.current_step());
        self.sync_wizard();
    }

    pub fn wizard_back(&mut self) {
        self.wizard.retreat();
        self.wizard_form.focus_step(self.wizard.current_step());
        self.sync_wizard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn session() -> Session {
        Session::in_memory(Settings::default()).unwrap()
    }

    fn type_into(app: &mut App, text: &str) {
        let input = app.current_form_mut().focused_mut().unwrap();
        input.clear();
        for c in text.chars() {
            input.insert(c);
        }
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Comment.next(), Tab::CreatePost);
        assert_eq!(Tab::CreatePost.previous(), Tab::Comment);
        assert_eq!(Tab::Manage.index(), 2);
    }

    #[test]
    fn test_form_focus_wraps() {
        let mut form = Form::new(vec![TextInput::new(), TextInput::new(), TextInput::new()]);
        form.cycle_focus(&[0, 1, 2], false);
        assert_eq!(form.focus, 2);
        form.cycle_focus(&[0, 1, 2], true);
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_wizard_flow_through_app() {
        let session = session();
        let mut app = App::new(&session);
        app.switch_tab(Tab::Wizard);

        type_into(&mut app, "Hi");
        app.wizard_next();
        assert_eq!(app.wizard.current_step(), Step::BasicInfo);
        assert_eq!(app.notifications.len(), 1);

        type_into(&mut app, "Hello");
        app.focus_next();
        assert_eq!(app.wizard_form.form.focus, WizardForm::USER_ID);
        type_into(&mut app, "7");
        app.wizard_next();
        assert_eq!(app.wizard.current_step(), Step::Content);
        assert_eq!(app.wizard_form.form.focus, WizardForm::BODY);
        assert_eq!(app.wizard.form_data().user_id, 7);

        type_into(&mut app, "0123456789");
        app.wizard_next();
        assert_eq!(app.wizard.renderer().view().step, Step::Review);
        assert!(app.focusable().is_empty());

        app.wizard_back();
        assert_eq!(app.wizard.current_step(), Step::Content);
    }

    #[test]
    fn test_examples_cycle() {
        let session = session();
        let mut app = App::new(&session);

        app.fill_next_example();
        assert_eq!(app.create_form.value(create_fields::TITLE), "Picachu Battle");
        app.fill_next_example();
        app.fill_next_example();
        assert_eq!(app.example, Some(PostExample::Travel));
        assert_eq!(app.create_form.value(create_fields::TITLE), "Tokyo Trip");
    }

    #[test]
    fn test_cycle_user_updates_form() {
        let session = session();
        let mut app = App::new(&session);
        assert_eq!(app.create_form.value(create_fields::USER_ID), "1");

        app.cycle_user(true);
        assert_eq!(app.create_form.value(create_fields::USER_ID), "2");
        app.cycle_user(false);
        app.cycle_user(false);
        assert_eq!(app.create_form.value(create_fields::USER_ID), "5");
    }

    #[test]
    fn test_request_sets_busy_status() {
        let session = session();
        let mut app = App::new(&session);

        app.request(PendingAction::LoadPost(PostId::new(3)));
        assert!(app.is_busy());
        assert_eq!(app.status_message.as_deref(), Some("Loading post 3..."));
        assert_eq!(app.take_pending(), Some(PendingAction::LoadPost(PostId::new(3))));
        assert!(!app.is_busy());
    }
}
