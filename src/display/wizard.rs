//! Wizard formatting for the console runner

use crate::wizard::WizardView;

use super::format::separator;

/// Text progress bar, e.g. `[██████░░░░░░] 67%`
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        progress.clamp(0.0, 1.0) * 100.0
    )
}

/// Render a wizard snapshot as text
pub fn format_wizard_view(view: &WizardView) -> String {
    let mut output = String::new();

    output.push_str(&view.indicator());
    output.push('\n');
    output.push_str(&progress_bar(view.progress, 24));
    output.push('\n');

    let steps: Vec<String> = view
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i + 1 == view.step.number() as usize {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();
    output.push_str(&steps.join(" > "));
    output.push('\n');

    if let Some(preview) = &view.preview {
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!("Title:   {}\n", preview.title));
        output.push_str(&format!("User ID: {}\n", preview.user_id));
        output.push_str(&format!("Body:    {}\n", preview.body));
        output.push_str(&separator(40));
        output.push('\n');
    }

    let mut controls = Vec::new();
    if view.nav.previous {
        controls.push("b = back");
    }
    if view.nav.next {
        controls.push("enter = next");
    }
    if view.nav.submit {
        controls.push("s = submit");
    }
    controls.push("q = quit");
    output.push_str(&format!("({})\n", controls.join(", ")));

    output
}
