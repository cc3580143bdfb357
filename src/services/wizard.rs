//! Wizard service
//!
//! `WizardController` is the step state machine: a current step that only
//! moves through `advance`, `retreat`, `jump_to` and `restart`, always staying
//! within the step list. `WizardSession` wraps a controller for an interactive
//! run, recording transitions in the audit log and issuing a confirmation
//! number on submission.

use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::DogwoodResult;
use crate::models::{BenefitStep, SessionId, StepStatus, Transition, WizardAction, WizardStep};

/// Linear step state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardController<S: WizardStep = BenefitStep> {
    current: S,
}

impl<S: WizardStep> Default for WizardController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WizardStep> WizardController<S> {
    /// A controller at the first step
    pub fn new() -> Self {
        Self { current: S::first() }
    }

    pub fn current(&self) -> S {
        self.current
    }

    /// Current 1-based step number
    pub fn current_step(&self) -> usize {
        self.current.number()
    }

    pub fn total_steps(&self) -> usize {
        S::ALL.len()
    }

    /// Whether the terminal step has been reached
    pub fn is_complete(&self) -> bool {
        self.current == S::last()
    }

    fn set_step(&mut self, number: usize) -> usize {
        let clamped = number.clamp(1, self.total_steps());
        if let Some(step) = S::from_number(clamped) {
            self.current = step;
        }
        self.current_step()
    }

    /// Move forward one step, staying on the last step
    pub fn advance(&mut self) -> usize {
        self.set_step(self.current_step() + 1)
    }

    /// Move back one step, staying on the first step
    pub fn retreat(&mut self) -> usize {
        self.set_step(self.current_step().saturating_sub(1))
    }

    /// Jump to a step; out-of-range targets are clamped
    pub fn jump_to(&mut self, step: i64) -> usize {
        let total = self.total_steps() as i64;
        self.set_step(step.clamp(1, total) as usize)
    }

    /// Return to the first step from the terminal step; no-op elsewhere
    pub fn restart(&mut self) -> usize {
        if self.is_complete() {
            self.current = S::first();
        }
        self.current_step()
    }

    fn review_number(&self) -> Option<usize> {
        S::review().map(|r| r.number())
    }

    /// Actions the current step offers, in button order
    pub fn available_actions(&self) -> Vec<WizardAction> {
        let n = self.current_step();
        let total = self.total_steps();
        let mut actions = Vec::new();

        if n > 1 && n < total {
            actions.push(WizardAction::Back);
        }

        match self.review_number() {
            Some(review) if n == review => {
                actions.extend(
                    self.editable_steps()
                        .iter()
                        .map(|s| WizardAction::Edit(s.number() as i64)),
                );
                actions.push(WizardAction::Submit);
            }
            Some(review) if n < review => actions.push(WizardAction::Next),
            None if n < total => actions.push(WizardAction::Next),
            _ => {}
        }

        if n == total {
            actions.push(WizardAction::Restart);
        }

        actions
    }

    /// Whether an action is offered at the current step
    pub fn allows(&self, action: WizardAction) -> bool {
        self.available_actions().contains(&action)
    }

    /// Dispatch an action and report the step change
    ///
    /// `Submit` advances only from the review step and `Restart` only from
    /// the terminal step; both are no-ops elsewhere.
    pub fn apply(&mut self, action: WizardAction) -> Transition {
        let from = self.current_step();

        let to = match action {
            WizardAction::Next => self.advance(),
            WizardAction::Back => self.retreat(),
            WizardAction::Edit(step) => self.jump_to(step),
            WizardAction::Submit => {
                if self.review_number() == Some(from) {
                    self.advance()
                } else {
                    from
                }
            }
            WizardAction::Restart => self.restart(),
        };

        Transition { action, from, to }
    }

    /// Status of every step relative to the current one
    pub fn step_statuses(&self) -> Vec<(S, StepStatus)> {
        let current = self.current_step();

        S::ALL
            .iter()
            .map(|&step| {
                let status = match step.number().cmp(&current) {
                    std::cmp::Ordering::Less => StepStatus::Complete,
                    std::cmp::Ordering::Equal => StepStatus::Current,
                    std::cmp::Ordering::Greater => StepStatus::Upcoming,
                };
                (step, status)
            })
            .collect()
    }

    /// Steps the review screen links back to
    pub fn editable_steps(&self) -> Vec<S> {
        match S::review() {
            Some(review) => S::ALL.iter().copied().take_while(|s| *s != review).collect(),
            None => Vec::new(),
        }
    }
}

/// Format a confirmation number, e.g. `VA-2026-03847`
pub fn confirmation_number(year: i32, seed: &Uuid) -> String {
    format!("VA-{}-{:05}", year, seed.as_u128() % 100_000)
}

/// An interactive wizard run
pub struct WizardSession<S: WizardStep = BenefitStep> {
    id: SessionId,
    controller: WizardController<S>,
    logger: Option<AuditLogger>,
    confirmation: Option<String>,
}

impl<S: WizardStep> WizardSession<S> {
    /// Open a session at the first step, recording the start when logging
    pub fn start(logger: Option<AuditLogger>) -> DogwoodResult<Self> {
        let session = Self {
            id: SessionId::new(),
            controller: WizardController::new(),
            logger,
            confirmation: None,
        };

        if let Some(logger) = &session.logger {
            logger.log(&AuditEntry::started(session.id, S::first().label()))?;
        }

        Ok(session)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn controller(&self) -> &WizardController<S> {
        &self.controller
    }

    pub fn current(&self) -> S {
        self.controller.current()
    }

    /// Confirmation number of the last submission, until restarted
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Apply an action, issuing a confirmation number on submission
    pub fn apply(&mut self, action: WizardAction) -> DogwoodResult<Transition> {
        let transition = self.controller.apply(action);
        let label = self.controller.current().label();

        let entry = match action {
            WizardAction::Submit if transition.changed() => {
                let number = confirmation_number(Utc::now().year(), &Uuid::new_v4());
                self.confirmation = Some(number.clone());
                AuditEntry::submitted(self.id, &transition, label, number)
            }
            WizardAction::Restart if transition.changed() => {
                self.confirmation = None;
                AuditEntry::transition(self.id, &transition, label)
            }
            _ => AuditEntry::transition(self.id, &transition, label),
        };

        if let Some(logger) = &self.logger {
            logger.log(&entry)?;
        }

        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EventKind;
    use tempfile::TempDir;

    fn at(step: i64) -> WizardController {
        let mut wizard = WizardController::new();
        wizard.jump_to(step);
        wizard
    }

    #[test]
    fn test_starts_at_step_one() {
        let wizard: WizardController = WizardController::new();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.current(), BenefitStep::PersonalInfo);
        assert_eq!(wizard.total_steps(), 5);
    }

    #[test]
    fn test_advance_saturates_at_last_step() {
        let mut wizard = at(5);
        assert_eq!(wizard.advance(), 5);
        assert_eq!(wizard.advance(), 5);
    }

    #[test]
    fn test_retreat_saturates_at_first_step() {
        let mut wizard = at(1);
        assert_eq!(wizard.retreat(), 1);
    }

    #[test]
    fn test_advance_then_retreat_returns_except_at_end() {
        for start in 1..=5 {
            let mut wizard = at(start);
            wizard.advance();
            let back = wizard.retreat() as i64;
            if start < 5 {
                assert_eq!(back, start);
            } else {
                assert_eq!(back, 4);
            }
        }
    }

    #[test]
    fn test_review_edit_scenario() {
        let mut wizard: WizardController = WizardController::new();
        wizard.advance();
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.current(), BenefitStep::Review);

        assert_eq!(wizard.jump_to(2), 2);
        assert_eq!(wizard.advance(), 3);
    }

    #[test]
    fn test_jump_to_clamps() {
        let mut wizard: WizardController = WizardController::new();
        assert_eq!(wizard.jump_to(0), 1);
        assert_eq!(wizard.jump_to(-7), 1);
        assert_eq!(wizard.jump_to(99), 5);
        assert_eq!(wizard.jump_to(3), 3);
    }

    #[test]
    fn test_restart_only_from_confirmation() {
        let mut wizard = at(3);
        assert_eq!(wizard.restart(), 3);

        let mut wizard = at(5);
        assert_eq!(wizard.restart(), 1);
        assert!(!wizard.is_complete());
    }

    #[test]
    fn test_available_actions_per_step() {
        use WizardAction::*;

        assert_eq!(at(1).available_actions(), vec![Next]);
        assert_eq!(at(2).available_actions(), vec![Back, Next]);
        assert_eq!(at(3).available_actions(), vec![Back, Next]);
        assert_eq!(
            at(4).available_actions(),
            vec![Back, Edit(1), Edit(2), Edit(3), Submit]
        );
        assert_eq!(at(5).available_actions(), vec![Restart]);
    }

    #[test]
    fn test_apply_submit_only_from_review() {
        let mut wizard = at(2);
        let t = wizard.apply(WizardAction::Submit);
        assert!(!t.changed());

        let mut wizard = at(4);
        let t = wizard.apply(WizardAction::Submit);
        assert_eq!((t.from, t.to), (4, 5));
    }

    #[test]
    fn test_full_cycle_through_apply() {
        let mut wizard: WizardController = WizardController::new();
        for action in [
            WizardAction::Next,
            WizardAction::Next,
            WizardAction::Next,
            WizardAction::Edit(1),
            WizardAction::Next,
            WizardAction::Next,
            WizardAction::Next,
            WizardAction::Submit,
        ] {
            assert!(
                wizard.allows(action),
                "{} not offered at step {}",
                action,
                wizard.current_step()
            );
            wizard.apply(action);
        }
        assert!(wizard.is_complete());

        let t = wizard.apply(WizardAction::Restart);
        assert_eq!((t.from, t.to), (5, 1));
    }

    #[test]
    fn test_step_statuses() {
        let statuses = at(3).step_statuses();
        let only: Vec<_> = statuses.iter().map(|(_, s)| *s).collect();
        assert_eq!(
            only,
            vec![
                StepStatus::Complete,
                StepStatus::Complete,
                StepStatus::Current,
                StepStatus::Upcoming,
                StepStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn test_editable_steps() {
        let wizard: WizardController = WizardController::new();
        assert_eq!(
            wizard.editable_steps(),
            vec![
                BenefitStep::PersonalInfo,
                BenefitStep::Household,
                BenefitStep::Income
            ]
        );
    }

    #[test]
    fn test_confirmation_number_format() {
        let number = confirmation_number(2026, &Uuid::from_u128(3847));
        assert_eq!(number, "VA-2026-03847");

        let number = confirmation_number(2026, &Uuid::new_v4());
        assert_eq!(number.len(), "VA-2026-00000".len());
    }

    #[test]
    fn test_session_submit_issues_confirmation() {
        let mut session: WizardSession = WizardSession::start(None).unwrap();
        for _ in 0..3 {
            session.apply(WizardAction::Next).unwrap();
        }
        assert!(session.confirmation().is_none());

        session.apply(WizardAction::Submit).unwrap();
        assert_eq!(session.current(), BenefitStep::Confirmation);
        assert!(session.confirmation().unwrap().starts_with("VA-"));

        session.apply(WizardAction::Restart).unwrap();
        assert!(session.confirmation().is_none());
        assert_eq!(session.controller().current_step(), 1);
    }

    #[test]
    fn test_session_writes_audit_log() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));

        let mut session: WizardSession = WizardSession::start(Some(logger.clone())).unwrap();
        for _ in 0..3 {
            session.apply(WizardAction::Next).unwrap();
        }
        session.apply(WizardAction::Submit).unwrap();

        let entries = logger.read_session(session.id()).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].event, EventKind::Start);
        assert_eq!(entries[4].event, EventKind::Submit);
        assert_eq!(entries[4].confirmation.as_deref(), session.confirmation());
        assert_eq!(entries[4].step_label, "Confirmation");
    }
}
