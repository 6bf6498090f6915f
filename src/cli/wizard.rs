//! Console wizard runner
//!
//! Drives the three-step wizard from stdin. Each step prompts for its fields;
//! an empty answer keeps the current value, `b` goes back and `q` quits.

use std::collections::HashMap;

use crate::activity::ActivityLog;
use crate::display::format_wizard_view;
use crate::error::RestdeskResult;
use crate::models::Post;
use crate::services::{log_wizard_event, SessionSubmitter};
use crate::session::Session;
use crate::wizard::{
    FieldId, FormData, RenderPort, Step, SubmitOutcome, WizardController, WizardEvent, WizardView,
};

use super::prompt_line;

/// Prints every snapshot and mirrors wizard events into the activity log
pub struct ConsoleRenderer<'a> {
    activity: &'a ActivityLog,
}

impl<'a> ConsoleRenderer<'a> {
    pub fn new(activity: &'a ActivityLog) -> Self {
        Self { activity }
    }
}

impl RenderPort for ConsoleRenderer<'_> {
    fn render(&mut self, view: &WizardView) {
        println!();
        print!("{}", format_wizard_view(view));
    }

    fn report(&mut self, event: &WizardEvent) {
        log_wizard_event(self.activity, event);
        match event {
            WizardEvent::ValidationFailed(err) => println!("Error: {}", err.reason),
            WizardEvent::Submitted(post) => println!("Wizard post created! (ID: {})", post.id),
            WizardEvent::SubmissionFailed(err) => {
                println!("Submission failed: {}", err);
                println!("Press s to retry, b to go back.");
            }
        }
    }
}

enum Command {
    Back,
    Quit,
}

fn fields_for(step: Step) -> &'static [FieldId] {
    match step {
        Step::BasicInfo => &[FieldId::Title, FieldId::UserId],
        Step::Content => &[FieldId::Body],
        Step::Review => &[],
    }
}

/// Field answers before the first prompt, with the selected user as author
fn initial_fields(session: &Session) -> HashMap<FieldId, String> {
    HashMap::from([(FieldId::UserId, session.users.selected().get().to_string())])
}

/// Last answer for `id`, else the wizard's saved value
fn current_value(form: &FormData, fields: &HashMap<FieldId, String>, id: FieldId) -> String {
    if let Some(value) = fields.get(&id) {
        return value.clone();
    }
    match id {
        FieldId::Title => form.title.clone(),
        FieldId::UserId => form.user_id.to_string(),
        FieldId::Body => form.body.clone(),
    }
}

/// Prompt for a step's fields; `Err(command)` when navigation was requested
fn collect_fields(
    step: Step,
    form: &FormData,
    fields: &mut HashMap<FieldId, String>,
) -> RestdeskResult<Result<(), Command>> {
    for &id in fields_for(step) {
        let current = current_value(form, fields, id);
        let prompt = if current.is_empty() {
            format!("{}: ", id.label())
        } else {
            format!("{} [{}]: ", id.label(), current)
        };

        let Some(input) = prompt_line(&prompt)? else {
            return Ok(Err(Command::Quit));
        };
        match input.trim() {
            "q" => return Ok(Err(Command::Quit)),
            "b" => return Ok(Err(Command::Back)),
            "" => {
                fields.insert(id, current);
            }
            _ => {
                fields.insert(id, input);
            }
        }
    }
    Ok(Ok(()))
}

/// Run the wizard until a post is created or the user quits
pub fn run_console_wizard(session: &Session) -> RestdeskResult<Option<Post>> {
    let mut wizard = WizardController::new(
        SessionSubmitter::new(session),
        ConsoleRenderer::new(&session.activity),
    );
    let mut fields = initial_fields(session);

    println!("Post wizard: empty input keeps the current value, b goes back, q quits.");
    wizard.refresh();

    loop {
        let step = wizard.current_step();

        if step.is_final() {
            let Some(action) = prompt_line("Action [s/b/q]: ")? else {
                return Ok(None);
            };
            match action.trim() {
                "s" | "" => match wizard.submit() {
                    Ok(SubmitOutcome::Created(post)) => return Ok(Some(post)),
                    Ok(SubmitOutcome::NotAtReview) | Err(_) => {}
                },
                "b" => {
                    wizard.retreat();
                }
                "q" => return Ok(None),
                other => println!("Unknown action '{}'", other),
            }
            continue;
        }

        match collect_fields(step, wizard.form_data(), &mut fields)? {
            Ok(()) => {
                // Failures are reported through the renderer
                let _ = wizard.advance(&fields);
            }
            Err(Command::Back) => {
                wizard.retreat();
            }
            Err(Command::Quit) => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::EntryKind;
    use crate::config::Settings;
    use crate::wizard::ValidationError;

    #[test]
    fn test_fields_per_step() {
        assert_eq!(fields_for(Step::BasicInfo), &[FieldId::Title, FieldId::UserId]);
        assert_eq!(fields_for(Step::Content), &[FieldId::Body]);
        assert!(fields_for(Step::Review).is_empty());
    }

    #[test]
    fn test_current_value_defaults() {
        let form = FormData::default();
        let fields = HashMap::new();
        assert_eq!(current_value(&form, &fields, FieldId::UserId), "1");
        assert_eq!(current_value(&form, &fields, FieldId::Title), "");
    }

    #[test]
    fn test_first_prompt_offers_selected_user() {
        let settings = Settings {
            default_user_id: 3,
            ..Settings::default()
        };
        let session = Session::in_memory(settings).unwrap();
        let fields = initial_fields(&session);

        assert_eq!(fields.get(&FieldId::UserId).map(String::as_str), Some("3"));
        assert_eq!(
            current_value(&FormData::default(), &fields, FieldId::UserId),
            "3"
        );
        assert_eq!(current_value(&FormData::default(), &fields, FieldId::Title), "");
    }

    #[test]
    fn test_selected_user_after_creation_seeds_wizard() {
        let session = Session::in_memory(Settings::default()).unwrap();
        session.users.select(crate::models::UserId::new(11));

        let fields = initial_fields(&session);
        assert_eq!(
            current_value(&FormData::default(), &fields, FieldId::UserId),
            "11"
        );
    }

    #[test]
    fn test_renderer_logs_validation_failures() {
        let activity = ActivityLog::new(10);
        let mut renderer = ConsoleRenderer::new(&activity);

        renderer.report(&WizardEvent::ValidationFailed(ValidationError::new(
            Step::Content,
            "Body must be at least 10 characters",
        )));

        let entries = activity.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Error);
    }
}
