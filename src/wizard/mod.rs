//! Multi-step post wizard
//!
//! A three-step flow (basic info, content, review) that builds up one post
//! before submitting it. The controller owns the state; field values,
//! submission and presentation are injected through the traits in `ports`.
//!
//! # Example
//!
//! ```rust,ignore
//! use restdesk::wizard::{NullRenderer, WizardController};
//!
//! let mut wizard = WizardController::new(submitter, NullRenderer);
//! wizard.advance(&fields)?;   // step 1 -> 2
//! wizard.advance(&fields)?;   // step 2 -> 3
//! wizard.submit()?;           // back to step 1 on success
//! ```

pub mod controller;
pub mod error;
pub mod ports;
pub mod state;
pub mod view;

pub use controller::{SubmitOutcome, WizardController};
pub use error::{SubmissionError, ValidationError};
pub use ports::{FieldId, FieldSource, NullRenderer, RenderPort, SubmitPort, WizardEvent};
pub use state::{FormData, Step, WizardState, STEP_LABELS, TOTAL_STEPS};
pub use view::{NavVisibility, WizardView};
