//! Audit entry data structures
//!
//! Defines the event kinds a wizard session can record and the entry format
//! itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{SessionId, Transition, WizardAction};

/// Kinds of recorded wizard events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A session was opened at the first step
    Start,
    /// The user moved between steps (or tried to)
    Transition,
    /// The application was submitted and a confirmation number issued
    Submit,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Start => write!(f, "START"),
            EventKind::Transition => write!(f, "MOVE"),
            EventKind::Submit => write!(f, "SUBMIT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub session_id: SessionId,

    pub event: EventKind,

    /// Action that caused the event; absent for `Start`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<WizardAction>,

    /// Step number before the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_step: Option<usize>,

    /// Step number after the action
    pub to_step: usize,

    /// Label of the step after the action
    pub step_label: String,

    /// Confirmation number issued on submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly opened session
    pub fn started(session_id: SessionId, step_label: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            event: EventKind::Start,
            action: None,
            from_step: None,
            to_step: 1,
            step_label: step_label.into(),
            confirmation: None,
        }
    }

    /// Entry for a step transition
    pub fn transition(
        session_id: SessionId,
        transition: &Transition,
        step_label: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            event: EventKind::Transition,
            action: Some(transition.action),
            from_step: Some(transition.from),
            to_step: transition.to,
            step_label: step_label.into(),
            confirmation: None,
        }
    }

    /// Entry for a submission
    pub fn submitted(
        session_id: SessionId,
        transition: &Transition,
        step_label: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            event: EventKind::Submit,
            confirmation: Some(confirmation.into()),
            ..Self::transition(session_id, transition, step_label)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.session_id,
            self.event,
        );

        if let Some(action) = &self.action {
            output.push_str(&format!(" {}", action));
        }

        match self.from_step {
            Some(from) => output.push_str(&format!(
                " {} -> {} ({})",
                from, self.to_step, self.step_label
            )),
            None => output.push_str(&format!(" at {} ({})", self.to_step, self.step_label)),
        }

        if let Some(confirmation) = &self.confirmation {
            output.push_str(&format!("\n  Confirmation: {}", confirmation));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_transition() -> Transition {
        Transition {
            action: WizardAction::Next,
            from: 1,
            to: 2,
        }
    }

    #[test]
    fn test_event_display() {
        assert_eq!(EventKind::Start.to_string(), "START");
        assert_eq!(EventKind::Transition.to_string(), "MOVE");
        assert_eq!(EventKind::Submit.to_string(), "SUBMIT");
    }

    #[test]
    fn test_started_entry() {
        let entry = AuditEntry::started(SessionId::new(), "Personal Info");

        assert_eq!(entry.event, EventKind::Start);
        assert!(entry.action.is_none());
        assert!(entry.from_step.is_none());
        assert_eq!(entry.to_step, 1);
    }

    #[test]
    fn test_transition_entry() {
        let entry = AuditEntry::transition(SessionId::new(), &next_transition(), "Household");

        assert_eq!(entry.event, EventKind::Transition);
        assert_eq!(entry.action, Some(WizardAction::Next));
        assert_eq!(entry.from_step, Some(1));
        assert_eq!(entry.to_step, 2);
        assert!(entry.confirmation.is_none());
    }

    #[test]
    fn test_submitted_entry() {
        let transition = Transition {
            action: WizardAction::Submit,
            from: 4,
            to: 5,
        };
        let entry =
            AuditEntry::submitted(SessionId::new(), &transition, "Confirmation", "VA-2026-03847");

        assert_eq!(entry.event, EventKind::Submit);
        assert_eq!(entry.confirmation.as_deref(), Some("VA-2026-03847"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::transition(SessionId::new(), &next_transition(), "Household");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("confirmation"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.event, EventKind::Transition);
        assert_eq!(deserialized.session_id, entry.session_id);
    }

    #[test]
    fn test_human_readable_format() {
        let session = SessionId::new();
        let entry = AuditEntry::transition(session, &next_transition(), "Household");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("MOVE"));
        assert!(formatted.contains("next"));
        assert!(formatted.contains("1 -> 2 (Household)"));
        assert!(formatted.contains(&session.to_string()));
    }
}
