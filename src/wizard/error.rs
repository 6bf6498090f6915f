//! Wizard error types
//!
//! Both kinds are recoverable: the controller is left in a well-defined state
//! after either one.

use thiserror::Error;

use super::state::Step;
use crate::error::RestdeskError;

/// The active step's predicate rejected the current field values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{step} ({}): {reason}", .step.label())]
pub struct ValidationError {
    pub step: Step,
    pub reason: String,
}

impl ValidationError {
    pub fn new(step: Step, reason: impl Into<String>) -> Self {
        Self {
            step,
            reason: reason.into(),
        }
    }
}

/// The submit port failed; the wizard stays on the review step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmissionError {
    pub message: String,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<RestdeskError> for SubmissionError {
    fn from(err: RestdeskError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ValidationError> for RestdeskError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<SubmissionError> for RestdeskError {
    fn from(err: SubmissionError) -> Self {
        Self::Submission(err.message)
    }
}
