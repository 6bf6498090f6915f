//! Runs queued requests against the services
//!
//! Services already log each exchange and record its result; this layer
//! reads the forms, shows the outcome as a toast, and updates form state.

use std::path::PathBuf;

use crate::error::RestdeskError;
use crate::models::{NewComment, NewUser, PostId};
use crate::services::{CommentService, CreatePostInput, PostService, UserService};
use crate::wizard::SubmitOutcome;

use super::app::{
    comment_fields, create_fields, manage_fields, user_fields, ActiveDialog, App, PendingAction,
};
use super::widgets::Notification;

impl App<'_> {
    /// Run a queued request and clear the busy status
    pub fn perform(&mut self, action: PendingAction) {
        match action {
            PendingAction::CreatePost => self.create_post(),
            PendingAction::LoadPost(id) => self.load_post(id),
            PendingAction::UpdatePost(id) => self.update_post(id),
            PendingAction::DeletePost(id) => self.delete_post(id),
            PendingAction::CreateUser => self.create_user(),
            PendingAction::CreateComment => self.create_comment(),
            PendingAction::WizardSubmit => self.submit_wizard(),
        }
        self.clear_status();
    }

    /// Parse the manage form's post id, reporting bad input
    pub fn manage_post_id(&mut self) -> Option<PostId> {
        match self.manage_form.value(manage_fields::POST_ID).parse::<PostId>() {
            Ok(id) if id.get() > 0 => Some(id),
            _ => {
                let message = "Post ID must be a valid positive number";
                self.session.activity.error(None, message);
                self.notify(Notification::warning(message));
                None
            }
        }
    }

    /// Ask for confirmation before deleting the post in the manage form
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.manage_post_id() {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        }
    }

    fn report_error(&mut self, err: &RestdeskError) {
        self.notify(Notification::from(err));
    }

    fn create_post(&mut self) {
        let attachment = self.create_form.value(create_fields::ATTACHMENT).trim();
        let input = CreatePostInput {
            title: self.create_form.value(create_fields::TITLE).to_string(),
            body: self.create_form.value(create_fields::BODY).to_string(),
            user_id: self.create_form.value(create_fields::USER_ID).to_string(),
            attachment: (!attachment.is_empty()).then(|| PathBuf::from(attachment)),
        };

        match PostService::new(self.session).create(input) {
            Ok(post) => {
                self.notify(Notification::success(format!(
                    "Post created successfully! (ID: {})",
                    post.id
                )));
                self.create_form.set(create_fields::TITLE, "");
                self.create_form.set(create_fields::BODY, "");
                self.create_form.set(create_fields::ATTACHMENT, "");
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn load_post(&mut self, id: PostId) {
        match PostService::new(self.session).load_for_update(id) {
            Ok(post) => {
                self.manage_form.set(manage_fields::TITLE, post.title.clone());
                self.manage_form.set(manage_fields::BODY, post.body.clone());
                self.manage_form.focus = manage_fields::TITLE;
                self.notify(Notification::info(format!("Post {} loaded", id)));
                self.loaded_post = Some(post);
            }
            Err(err) => {
                self.loaded_post = None;
                self.report_error(&err);
            }
        }
    }

    fn update_post(&mut self, id: PostId) {
        let title = self.manage_form.value(manage_fields::TITLE).to_string();
        let body = self.manage_form.value(manage_fields::BODY).to_string();
        let previous = self.loaded_post.as_ref().filter(|post| post.id == id);

        match PostService::new(self.session).update(id, &title, &body, previous) {
            Ok(post) => {
                self.notify(Notification::success(format!("Post {} updated!", id)));
                self.loaded_post = Some(post);
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn delete_post(&mut self, id: PostId) {
        match PostService::new(self.session).delete(id) {
            Ok(()) => {
                self.notify(Notification::success(format!("Post {} deleted", id)));
                self.manage_form.clear();
                self.loaded_post = None;
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn create_user(&mut self) {
        let user = NewUser {
            name: self.user_form.value(user_fields::NAME).trim().to_string(),
            username: self.user_form.value(user_fields::USERNAME).trim().to_string(),
            email: self.user_form.value(user_fields::EMAIL).trim().to_string(),
            phone: self.user_form.value(user_fields::PHONE).trim().to_string(),
            website: self.user_form.value(user_fields::WEBSITE).trim().to_string(),
        };

        match UserService::new(self.session).create(user) {
            Ok(created) => {
                self.notify(Notification::success(format!(
                    "User \"{}\" created (ID: {})",
                    created.label(),
                    created.id
                )));
                self.user_form.clear();
                self.create_form
                    .set(create_fields::USER_ID, created.id.get().to_string());
                self.wizard_form.set_user(created.id);
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn create_comment(&mut self) {
        let post_id = match self.comment_form.value(comment_fields::POST_ID).parse::<PostId>() {
            Ok(id) => id,
            Err(_) => {
                let message = "Post ID must be a valid positive number";
                self.session.activity.error(None, message);
                self.notify(Notification::warning(message));
                return;
            }
        };
        let comment =
            NewComment::new(self.comment_form.value(comment_fields::BODY)).on_post(post_id);

        match CommentService::new(self.session).create(comment) {
            Ok(created) => {
                self.notify(Notification::success(format!(
                    "Comment added! (ID: {})",
                    created.id
                )));
                self.comment_form.set(comment_fields::BODY, "");
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn submit_wizard(&mut self) {
        // Outcomes are reported through the renderer
        if let Ok(SubmitOutcome::Created(_)) = self.wizard.submit() {
            self.wizard_form.reset();
        }
        self.sync_wizard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::EntryKind;
    use crate::config::Settings;
    use crate::models::{User, UserId};
    use crate::session::Session;
    use crate::tui::app::WizardForm;
    use crate::tui::widgets::NotificationType;

    fn offline_session() -> Session {
        let settings = Settings {
            api_base_url: "http://127.0.0.1:9".into(),
            ..Settings::default()
        };
        Session::in_memory(settings).unwrap()
    }

    #[test]
    fn test_invalid_create_shows_warning() {
        let session = offline_session();
        let mut app = App::new(&session);
        app.create_form.set(create_fields::TITLE, "Hi");

        app.request(PendingAction::CreatePost);
        let action = app.take_pending().unwrap();
        app.perform(action);

        assert!(app.status_message.is_none());
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.notification_type, NotificationType::Warning);
        assert!(session.activity.results().is_empty());
    }

    #[test]
    fn test_bad_post_id_never_opens_dialog() {
        let session = offline_session();
        let mut app = App::new(&session);
        app.manage_form.set(manage_fields::POST_ID, "abc");

        app.confirm_delete();
        assert!(!app.has_dialog());
        assert_eq!(session.activity.entries()[0].kind, EntryKind::Error);

        app.manage_form.set(manage_fields::POST_ID, "4");
        app.confirm_delete();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete(PostId::new(4)));
    }

    #[test]
    fn test_network_failure_shows_error() {
        let session = offline_session();
        let mut app = App::new(&session);

        app.perform(PendingAction::DeletePost(PostId::new(1)));
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.notification_type, NotificationType::Error);
        assert!(session.activity.latest_result().unwrap().is_error());
    }

    #[test]
    fn test_wizard_submit_failure_keeps_inputs() {
        let session = offline_session();
        let mut app = App::new(&session);
        app.wizard_form.form.set(WizardForm::TITLE, "Hello");
        app.wizard_next();
        app.wizard_form.form.set(WizardForm::BODY, "0123456789");
        app.wizard_next();

        app.perform(PendingAction::WizardSubmit);
        assert_eq!(app.wizard.current_step(), crate::wizard::Step::Review);
        assert_eq!(
            app.wizard_form.form.value(WizardForm::TITLE),
            "Hello"
        );
        let toast = app.notifications.current().unwrap();
        assert!(toast.message.starts_with("Wizard error"));
    }
    #[test]
    fn test_wizard_user_id_follows_default_user() {
        let settings = Settings {
            default_user_id: 3,
            ..Settings::default()
        };
        let session = Session::in_memory(settings).unwrap();
        let app = App::new(&session);

        assert_eq!(app.wizard_form.form.value(WizardForm::USER_ID), "3");
        assert_eq!(app.create_form.value(create_fields::USER_ID), "3");
    }

    #[test]
    fn test_wizard_user_id_follows_created_user() {
        let session = offline_session();
        session.users.add_created(&User {
            id: UserId::new(11),
            name: "Ada Lovelace".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            website: "ada.dev".into(),
        });
        let mut app = App::new(&session);

        assert_eq!(app.create_form.value(create_fields::USER_ID), "11");
        assert_eq!(app.wizard_form.form.value(WizardForm::USER_ID), "11");

        app.wizard_form.set_user(UserId::new(12));
        assert_eq!(app.wizard_form.form.value(WizardForm::USER_ID), "12");
    }

    #[test]
    fn test_wizard_reset_keeps_user_id() {
        let mut form = WizardForm::new(UserId::new(7));
        form.form.set(WizardForm::TITLE, "Hello");
        form.form.set(WizardForm::BODY, "0123456789");
        form.form.focus = WizardForm::BODY;

        form.reset();
        assert_eq!(form.form.value(WizardForm::TITLE), "");
        assert_eq!(form.form.value(WizardForm::BODY), "");
        assert_eq!(form.form.value(WizardForm::USER_ID), "7");
        assert_eq!(form.form.focus, WizardForm::TITLE);
    }
}
