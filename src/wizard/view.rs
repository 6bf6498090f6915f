//! Render snapshot of the wizard
//!
//! Everything a front-end needs to draw the wizard is derived from the state
//! here, so navigation visibility stays a pure function of the current step.

use super::state::{FormData, Step, WizardState, STEP_LABELS, TOTAL_STEPS};

/// Which navigation controls are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavVisibility {
    pub previous: bool,
    pub next: bool,
    pub submit: bool,
}

impl NavVisibility {
    pub fn for_step(step: Step) -> Self {
        Self {
            previous: step.previous().is_some(),
            next: !step.is_final(),
            submit: step.is_final(),
        }
    }
}

/// Snapshot handed to the render port
#[derive(Debug, Clone, PartialEq)]
pub struct WizardView {
    pub step: Step,
    pub total_steps: u8,
    /// `step / total_steps`
    pub progress: f64,
    pub labels: [&'static str; TOTAL_STEPS as usize],
    /// Only present on the review step
    pub preview: Option<FormData>,
    pub nav: NavVisibility,
}

impl WizardView {
    pub fn from_state(state: &WizardState) -> Self {
        let step = state.current_step;
        Self {
            step,
            total_steps: TOTAL_STEPS,
            progress: state.progress(),
            labels: STEP_LABELS,
            preview: step.is_final().then(|| state.form_data.clone()),
            nav: NavVisibility::for_step(step),
        }
    }

    /// e.g. `Step 2 of 3: Content`
    pub fn indicator(&self) -> String {
        format!(
            "Step {} of {}: {}",
            self.step.number(),
            self.total_steps,
            self.step.label()
        )
    }

    /// Progress as a whole percentage
    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(step: Step) -> WizardView {
        let state = WizardState {
            current_step: step,
            form_data: FormData {
                title: "Hello".into(),
                user_id: 7,
                body: "0123456789".into(),
            },
        };
        WizardView::from_state(&state)
    }

    #[test]
    fn test_nav_visibility_per_step() {
        let first = view_at(Step::BasicInfo).nav;
        assert!(!first.previous && first.next && !first.submit);

        let middle = view_at(Step::Content).nav;
        assert!(middle.previous && middle.next && !middle.submit);

        let last = view_at(Step::Review).nav;
        assert!(last.previous && !last.next && last.submit);
    }

    #[test]
    fn test_preview_only_on_review() {
        assert!(view_at(Step::BasicInfo).preview.is_none());
        assert!(view_at(Step::Content).preview.is_none());
        let preview = view_at(Step::Review).preview.unwrap();
        assert_eq!(preview.user_id, 7);
    }

    #[test]
    fn test_indicator_and_percent() {
        let view = view_at(Step::Content);
        assert_eq!(view.indicator(), "Step 2 of 3: Content");
        assert_eq!(view.percent(), 67);
        assert_eq!(view_at(Step::Review).percent(), 100);
    }
}
