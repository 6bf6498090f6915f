//! Wizard glue
//!
//! Connects the wizard controller to the session: submissions go through the
//! API client and every wizard event lands in the activity panels.

use crate::activity::{ActivityLog, ResultRecord};
use crate::models::{NewPost, Post, UserId};
use crate::session::Session;
use crate::wizard::{FormData, SubmissionError, SubmitPort, WizardEvent};

use super::record_failure;

/// Submit port that creates the post through the session's client
pub struct SessionSubmitter<'a> {
    session: &'a Session,
}

impl<'a> SessionSubmitter<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl SubmitPort for SessionSubmitter<'_> {
    fn submit(&mut self, payload: &FormData) -> Result<Post, SubmissionError> {
        let activity = &self.session.activity;
        let post = NewPost::new(
            payload.title.clone(),
            payload.body.clone(),
            UserId::new(payload.user_id),
        );

        let exchange = activity.request("Wizard submitting post");

        match self.session.client.create_post(&post) {
            Ok(created) => {
                activity.response(
                    exchange,
                    format!("Wizard post created (ID: {})", created.id),
                );
                let data = serde_json::to_value(&created)
                    .map_err(|e| SubmissionError::new(e.to_string()))?;
                activity.record_result(
                    ResultRecord::new("POST", "/posts (Wizard)", "Wizard post created!", data)
                        .with_exchange(exchange),
                );
                Ok(created)
            }
            Err(err) => Err(record_failure(
                self.session,
                exchange,
                "POST",
                "/posts (Wizard)",
                "Wizard error",
                err,
            )
            .into()),
        }
    }
}

/// Log validation failures reported by the wizard
///
/// Submission outcomes are already logged by [`SessionSubmitter`].
pub fn log_wizard_event(activity: &ActivityLog, event: &WizardEvent) {
    if let WizardEvent::ValidationFailed(err) = event {
        activity.error(None, err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::EntryKind;
    use crate::config::Settings;
    use crate::wizard::{NullRenderer, Step, ValidationError, WizardController};

    #[test]
    fn test_unreachable_api_keeps_wizard_on_review() {
        let settings = Settings {
            api_base_url: "http://127.0.0.1:9".into(),
            ..Settings::default()
        };
        let session = Session::in_memory(settings).unwrap();
        let mut wizard = WizardController::new(SessionSubmitter::new(&session), NullRenderer);

        let fields = |id: crate::wizard::FieldId| match id {
            crate::wizard::FieldId::Title => "Wizard title".to_string(),
            crate::wizard::FieldId::UserId => "2".to_string(),
            crate::wizard::FieldId::Body => "A body of decent length".to_string(),
        };
        wizard.advance(&fields).unwrap();
        wizard.advance(&fields).unwrap();

        assert!(wizard.submit().is_err());
        assert_eq!(wizard.current_step(), Step::Review);

        let result = session.activity.latest_result().unwrap();
        assert_eq!(result.endpoint, "/posts (Wizard)");
        assert!(result.is_error());
    }

    #[test]
    fn test_validation_event_logged() {
        let session = Session::in_memory(Settings::default()).unwrap();
        let event = WizardEvent::ValidationFailed(ValidationError::new(
            Step::BasicInfo,
            "Title must be at least 3 characters",
        ));

        log_wizard_event(&session.activity, &event);

        let entries = session.activity.entries();
        assert_eq!(entries[0].kind, EntryKind::Error);
        assert!(entries[0].message.starts_with("Step 1 (Basic Info)"));
    }
}
