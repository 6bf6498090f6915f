//! Capabilities the wizard controller depends on
//!
//! The controller never touches the terminal or the network itself: field
//! values come in through a [`FieldSource`], the payload goes out through a
//! [`SubmitPort`], and presentation is kept in sync through a [`RenderPort`].

use std::collections::HashMap;

use super::error::{SubmissionError, ValidationError};
use super::state::FormData;
use super::view::WizardView;
use crate::models::Post;

/// Input fields read by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Title,
    UserId,
    Body,
}

impl FieldId {
    /// Stable identifier used by front-ends
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "wizardTitle",
            Self::UserId => "wizardUserId",
            Self::Body => "wizardBody",
        }
    }

    /// Prompt label
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::UserId => "User ID",
            Self::Body => "Body",
        }
    }
}

/// Current raw text of an input
pub trait FieldSource {
    fn field(&self, id: FieldId) -> String;
}

impl<F> FieldSource for F
where
    F: Fn(FieldId) -> String,
{
    fn field(&self, id: FieldId) -> String {
        self(id)
    }
}

impl FieldSource for HashMap<FieldId, String> {
    fn field(&self, id: FieldId) -> String {
        self.get(&id).cloned().unwrap_or_default()
    }
}

/// Performs the create-post request for the wizard's payload
pub trait SubmitPort {
    fn submit(&mut self, payload: &FormData) -> Result<Post, SubmissionError>;
}

/// Something the controller reports besides a re-render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Advancing was refused
    ValidationFailed(ValidationError),
    /// The post was created; the wizard has been reset
    Submitted(Post),
    /// The submit port failed; the wizard is still on the review step
    SubmissionFailed(SubmissionError),
}

/// Keeps presentation in sync with the controller
pub trait RenderPort {
    /// Called after every state change with a fresh snapshot
    fn render(&mut self, view: &WizardView);

    /// Called for validation failures and submission outcomes
    fn report(&mut self, _event: &WizardEvent) {}
}

/// Renderer that ignores everything, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderPort for NullRenderer {
    fn render(&mut self, _view: &WizardView) {}
}
