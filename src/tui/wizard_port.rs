//! Wizard render port for the TUI
//!
//! The TUI redraws every frame, so rendering just caches the latest view.
//! Reported events are mirrored into the activity log and queued as toasts
//! for the app to pick up.

use crate::activity::ActivityLog;
use crate::services::log_wizard_event;
use crate::wizard::{RenderPort, WizardEvent, WizardState, WizardView};

use super::widgets::Notification;

pub struct TuiRenderer<'a> {
    activity: &'a ActivityLog,
    view: WizardView,
    notifications: Vec<Notification>,
}

impl<'a> TuiRenderer<'a> {
    pub fn new(activity: &'a ActivityLog) -> Self {
        Self {
            activity,
            view: WizardView::from_state(&WizardState::default()),
            notifications: Vec::new(),
        }
    }

    /// Last view pushed by the controller
    pub fn view(&self) -> &WizardView {
        &self.view
    }

    /// Toasts reported since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl RenderPort for TuiRenderer<'_> {
    fn render(&mut self, view: &WizardView) {
        self.view = view.clone();
    }

    fn report(&mut self, event: &WizardEvent) {
        log_wizard_event(self.activity, event);

        let notification = match event {
            WizardEvent::ValidationFailed(err) => Notification::warning(err.reason.clone()),
            WizardEvent::Submitted(post) => {
                Notification::success(format!("Wizard post created! (ID: {})", post.id))
            }
            WizardEvent::SubmissionFailed(err) => {
                Notification::error(format!("Wizard error: {}", err))
            }
        };
        self.notifications.push(notification);
    }
}
