//! Wizard controller
//!
//! Drives the three-step post wizard. Each step's fields are validated from
//! the field source and saved into the form data before the step counter
//! moves, so a rejected step never leaves partial writes behind.

use tracing::{debug, info, warn};

use super::error::{SubmissionError, ValidationError};
use super::ports::{FieldId, FieldSource, RenderPort, SubmitPort, WizardEvent};
use super::state::{FormData, Step, WizardState};
use super::view::WizardView;
use crate::models::Post;
use crate::validation::post::{parse_user_id, validate_body, validate_title};

/// Result of calling [`WizardController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The post was created and the wizard reset
    Created(Post),
    /// Not on the review step; nothing was sent
    NotAtReview,
}

/// Field values accepted by a step's predicate
enum Captured {
    BasicInfo { title: String, user_id: u64 },
    Content { body: String },
    Review,
}

/// Owns the wizard state and the submit/render capabilities
pub struct WizardController<S, R> {
    state: WizardState,
    submitter: S,
    renderer: R,
}

impl<S: SubmitPort, R: RenderPort> WizardController<S, R> {
    /// Create a controller at step 1 with default form data
    pub fn new(submitter: S, renderer: R) -> Self {
        Self {
            state: WizardState::default(),
            submitter,
            renderer,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub fn form_data(&self) -> &FormData {
        &self.state.form_data
    }

    /// Snapshot of the current state
    pub fn view(&self) -> WizardView {
        WizardView::from_state(&self.state)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Push the current view to the renderer without changing state
    pub fn refresh(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    /// Validate the active step, save its fields and move forward
    ///
    /// On the final step a successful call saves nothing and stays put.
    pub fn advance(&mut self, fields: &dyn FieldSource) -> Result<Step, ValidationError> {
        let step = self.state.current_step;

        let captured = match validate_step(step, fields) {
            Ok(captured) => captured,
            Err(err) => {
                warn!(step = step.number(), reason = %err.reason, "wizard step rejected");
                self.renderer
                    .report(&WizardEvent::ValidationFailed(err.clone()));
                return Err(err);
            }
        };

        self.save(captured);

        if let Some(next) = step.next() {
            self.state.current_step = next;
            debug!(from = step.number(), to = next.number(), "wizard advanced");
            self.refresh();
        }

        Ok(self.state.current_step)
    }

    /// Move back one step; a no-op on the first step
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.state.current_step.previous() {
            debug!(
                from = self.state.current_step.number(),
                to = previous.number(),
                "wizard went back"
            );
            self.state.current_step = previous;
            self.refresh();
        }
        self.state.current_step
    }

    /// Send the accumulated form data through the submit port
    ///
    /// Only acts on the review step. A failed submission leaves the state
    /// untouched so the call can be retried.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmissionError> {
        if !self.state.current_step.is_final() {
            debug!(
                step = self.state.current_step.number(),
                "submit ignored outside review step"
            );
            return Ok(SubmitOutcome::NotAtReview);
        }

        match self.submitter.submit(&self.state.form_data) {
            Ok(post) => {
                info!(id = %post.id, "wizard post created");
                self.renderer.report(&WizardEvent::Submitted(post.clone()));
                self.state.reset();
                self.refresh();
                Ok(SubmitOutcome::Created(post))
            }
            Err(err) => {
                warn!(error = %err, "wizard submission failed");
                self.renderer
                    .report(&WizardEvent::SubmissionFailed(err.clone()));
                Err(err)
            }
        }
    }

    fn save(&mut self, captured: Captured) {
        let data = &mut self.state.form_data;
        match captured {
            Captured::BasicInfo { title, user_id } => {
                data.title = title;
                data.user_id = user_id;
            }
            Captured::Content { body } => data.body = body,
            Captured::Review => {}
        }
    }
}

/// Run a step's predicate over the live field values
fn validate_step(step: Step, fields: &dyn FieldSource) -> Result<Captured, ValidationError> {
    match step {
        Step::BasicInfo => {
            let title = fields.field(FieldId::Title);
            validate_title(&title).map_err(|reason| ValidationError::new(step, reason))?;
            let user_id = parse_user_id(&fields.field(FieldId::UserId))
                .map_err(|reason| ValidationError::new(step, reason))?;
            Ok(Captured::BasicInfo {
                title,
                user_id: user_id.get(),
            })
        }
        Step::Content => {
            let body = fields.field(FieldId::Body);
            validate_body(&body).map_err(|reason| ValidationError::new(step, reason))?;
            Ok(Captured::Content { body })
        }
        Step::Review => Ok(Captured::Review),
    }
}
