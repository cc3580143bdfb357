//! Wizard display formatting
//!
//! Formats the step indicator and the body of each wizard screen.

use crate::models::wizard::WHAT_HAPPENS_NEXT;
use crate::models::{BenefitStep, StepStatus, WizardAction, WizardStep};
use crate::services::WizardController;

/// Format the step indicator, e.g. `(v) Personal Info > (2) Household > ...`
pub fn format_step_indicator<S: WizardStep>(statuses: &[(S, StepStatus)]) -> String {
    statuses
        .iter()
        .map(|(step, status)| match status {
            StepStatus::Complete => format!("(v) {}", step.label()),
            StepStatus::Current => format!("[{}] {}", step.number(), step.label().to_uppercase()),
            StepStatus::Upcoming => format!("({}) {}", step.number(), step.label()),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Label of an action as the host shows it
pub fn action_label<S: WizardStep>(action: &WizardAction) -> String {
    match action {
        WizardAction::Next => "Next Step".to_string(),
        WizardAction::Back => "Previous".to_string(),
        WizardAction::Submit => "Submit Application".to_string(),
        WizardAction::Restart => "Start New Application".to_string(),
        WizardAction::Edit(n) => match usize::try_from(*n).ok().and_then(S::from_number) {
            Some(step) => format!("Edit {}", step.label()),
            None => format!("Edit step {}", n),
        },
    }
}

/// Format a full wizard screen for the benefit application
pub fn format_wizard_screen(
    wizard: &WizardController<BenefitStep>,
    confirmation: Option<&str>,
) -> String {
    let step = wizard.current();
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n\n",
        format_step_indicator(&wizard.step_statuses())
    ));
    output.push_str(&format!(
        "Step {} of {}: {}\n",
        wizard.current_step(),
        wizard.total_steps(),
        step.heading()
    ));
    output.push_str(&format!("  {}\n", step.summary()));

    if step == BenefitStep::Review {
        output.push('\n');
        for editable in wizard.editable_steps() {
            output.push_str(&format!("  {:<16} [Edit]\n", editable.heading()));
        }
    }

    if step == BenefitStep::Confirmation {
        if let Some(number) = confirmation {
            output.push_str(&format!("\n  Confirmation Number: {}\n", number));
        }
        output.push_str("\nWhat Happens Next\n");
        for (i, (title, detail)) in WHAT_HAPPENS_NEXT.iter().enumerate() {
            output.push_str(&format!("  {}. {}: {}\n", i + 1, title, detail));
        }
    }

    output
}
