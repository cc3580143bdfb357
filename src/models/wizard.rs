//! Wizard step model
//!
//! A wizard is a fixed, ordered list of steps. Steps are a plain enum that
//! implements [`WizardStep`]; the controller in `services::wizard` moves
//! between them. Step numbers are 1-based, as shown to users.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite, ordered set of wizard steps
pub trait WizardStep: Copy + Eq + fmt::Debug + 'static {
    /// Every step, in order
    const ALL: &'static [Self];

    /// Short label for the step indicator
    fn label(&self) -> &'static str;

    /// Page heading for the step
    fn heading(&self) -> &'static str {
        self.label()
    }

    /// The review step, whose edit links jump back to earlier steps
    fn review() -> Option<Self> {
        None
    }

    /// 1-based position of this step
    fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .map(|i| i + 1)
            .unwrap_or(1)
    }

    /// Step at a 1-based position
    fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    fn first() -> Self {
        Self::ALL[0]
    }

    fn last() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }
}

/// Steps of the benefit application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitStep {
    PersonalInfo,
    Household,
    Income,
    Review,
    Confirmation,
}

impl WizardStep for BenefitStep {
    const ALL: &'static [Self] = &[
        Self::PersonalInfo,
        Self::Household,
        Self::Income,
        Self::Review,
        Self::Confirmation,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Household => "Household",
            Self::Income => "Income",
            Self::Review => "Review",
            Self::Confirmation => "Confirmation",
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::Household => "Household Information",
            Self::Income => "Income & Employment",
            Self::Review => "Review Your Application",
            Self::Confirmation => "Application Submitted",
        }
    }

    fn review() -> Option<Self> {
        Some(Self::Review)
    }
}

impl BenefitStep {
    /// Introductory sentence under the heading
    pub fn summary(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "All fields marked with * are required.",
            Self::Household => "Tell us about the people in your household.",
            Self::Income => {
                "Provide information about your household income. This is used to determine eligibility."
            }
            Self::Review => {
                "Please review all information before submitting. You can go back to edit any section."
            }
            Self::Confirmation => "Your application has been received and is being processed.",
        }
    }
}

impl fmt::Display for BenefitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What happens after an application is submitted
pub const WHAT_HAPPENS_NEXT: [(&str, &str); 4] = [
    (
        "Application Review",
        "A caseworker will review your application within 5-7 business days.",
    ),
    (
        "Verification",
        "You may be contacted to provide additional documentation.",
    ),
    ("Interview", "A phone or in-person interview may be scheduled."),
    (
        "Decision",
        "You will receive a decision letter by mail within 30 days.",
    ),
];

/// Where a step sits relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

/// A user action on the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "step", rename_all = "snake_case")]
pub enum WizardAction {
    /// "Next Step"
    Next,
    /// "Previous"
    Back,
    /// "Submit Application" on the review step
    Submit,
    /// An "Edit" link on the review step; the target is clamped
    Edit(i64),
    /// "Start New Application" on the confirmation step
    Restart,
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Back => write!(f, "back"),
            Self::Submit => write!(f, "submit"),
            Self::Edit(step) => write!(f, "edit {}", step),
            Self::Restart => write!(f, "restart"),
        }
    }
}

/// The outcome of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub action: WizardAction,
    pub from: usize,
    pub to: usize,
}

impl Transition {
    /// Whether the step actually changed
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(BenefitStep::PersonalInfo.number(), 1);
        assert_eq!(BenefitStep::Confirmation.number(), 5);
        assert_eq!(BenefitStep::from_number(4), Some(BenefitStep::Review));
        assert_eq!(BenefitStep::from_number(0), None);
        assert_eq!(BenefitStep::from_number(6), None);
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(BenefitStep::first(), BenefitStep::PersonalInfo);
        assert_eq!(BenefitStep::last(), BenefitStep::Confirmation);
    }

    #[test]
    fn test_labels_and_headings() {
        assert_eq!(BenefitStep::Household.label(), "Household");
        assert_eq!(BenefitStep::Income.heading(), "Income & Employment");
        assert_eq!(BenefitStep::Review.to_string(), "Review");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(WizardAction::Edit(2)).unwrap();
        assert_eq!(json["action"], "edit");
        assert_eq!(json["step"], 2);

        let json = serde_json::to_value(WizardAction::Next).unwrap();
        assert_eq!(json["action"], "next");
    }

    #[test]
    fn test_transition_changed() {
        let t = Transition {
            action: WizardAction::Next,
            from: 5,
            to: 5,
        };
        assert!(!t.changed());
    }
}
