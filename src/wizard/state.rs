//! Wizard state: step position and accumulated form data

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of steps in the wizard
pub const TOTAL_STEPS: u8 = 3;

/// Human labels for the steps, in order
pub const STEP_LABELS: [&str; TOTAL_STEPS as usize] = ["Basic Info", "Content", "Review & Submit"];

/// Position in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    /// Title and author
    #[default]
    BasicInfo,
    /// Post body
    Content,
    /// Read-only preview before submission
    Review,
}

impl Step {
    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Content => 2,
            Self::Review => 3,
        }
    }

    /// Step for a 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::BasicInfo),
            2 => Some(Self::Content),
            3 => Some(Self::Review),
            _ => None,
        }
    }

    /// The following step, if any
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, if any
    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Whether this is the last step
    pub fn is_final(self) -> bool {
        self.number() == TOTAL_STEPS
    }

    /// Human label
    pub fn label(self) -> &'static str {
        STEP_LABELS[(self.number() - 1) as usize]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}", self.number())
    }
}

/// The record the wizard builds up; serializes as the create-post payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub title: String,
    pub user_id: u64,
    pub body: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            title: String::new(),
            user_id: 1,
            body: String::new(),
        }
    }
}

/// Step position plus accumulated data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    pub current_step: Step,
    pub form_data: FormData,
}

impl WizardState {
    /// Progress through the wizard as a fraction in (0, 1]
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step.number()) / f64::from(TOTAL_STEPS)
    }

    /// Return to the initial defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
