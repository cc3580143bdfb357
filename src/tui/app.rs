//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::error::DogwoodResult;
use crate::models::{ComponentCategory, ComponentMeta, WizardAction};
use crate::registry::Registry;
use crate::services::{ComponentCatalogue, ComponentFilter, WizardSession};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Catalogue,
    Wizard,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Catalogue => "Components",
            Self::Wizard => "Benefit Application",
        }
    }

    fn toggle(&self) -> Self {
        match self {
            Self::Catalogue => Self::Wizard,
            Self::Wizard => Self::Catalogue,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The catalogue tables
    pub registry: &'a Registry,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Category the component list is narrowed to, if any
    pub category_filter: Option<ComponentCategory>,

    /// Selected row in the component list
    pub selected_index: usize,

    /// Scroll offset of the detail pane
    pub detail_scroll: u16,

    /// The running benefit application
    pub wizard: WizardSession,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(registry: &'a Registry, settings: &'a Settings, wizard: WizardSession) -> Self {
        Self {
            registry,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            category_filter: None,
            selected_index: 0,
            detail_scroll: 0,
            wizard,
            status_message: None,
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn switch_view(&mut self) {
        self.active_view = self.active_view.toggle();
        self.clear_status();
    }

    /// Components shown in the list under the current filter
    pub fn visible_components(&self) -> Vec<&'a ComponentMeta> {
        let filter = ComponentFilter {
            category: self.category_filter,
            exclude_planned: !self.settings.include_planned,
            ..Default::default()
        };
        ComponentCatalogue::new(self.registry).filter(&filter)
    }

    /// The highlighted component, if the list is not empty
    pub fn selected_component(&self) -> Option<&'a ComponentMeta> {
        self.visible_components().get(self.selected_index).copied()
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.detail_scroll = 0;
        }
    }

    pub fn move_down(&mut self) {
        let count = self.visible_components().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
            self.detail_scroll = 0;
        }
    }

    /// Step the category filter: all, then each category in order, then all
    pub fn cycle_category(&mut self) {
        let last = ComponentCategory::ALL[ComponentCategory::ALL.len() - 1];
        self.category_filter = match self.category_filter {
            None => Some(ComponentCategory::ALL[0]),
            Some(category) if category == last => None,
            Some(category) => Some(category.next()),
        };
        self.selected_index = 0;
        self.detail_scroll = 0;

        let label = self
            .category_filter
            .map(|c| c.to_string())
            .unwrap_or_else(|| "All".to_string());
        self.set_status(format!("Category: {}", label));
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Apply a wizard action if the current step offers it
    pub fn wizard_action(&mut self, action: WizardAction) -> DogwoodResult<()> {
        if !self.wizard.controller().allows(action) {
            self.set_status("Not available on this step");
            return Ok(());
        }

        self.wizard.apply(action)?;
        match self.wizard.confirmation() {
            Some(number) => self.set_status(format!("Submitted: {}", number)),
            None => self.clear_status(),
        }
        Ok(())
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BenefitStep;

    fn app(settings: &Settings) -> App<'_> {
        let wizard = WizardSession::start(None).unwrap();
        App::new(Registry::builtin(), settings, wizard)
    }

    #[test]
    fn test_category_cycle_wraps_to_all() {
        let settings = Settings::default();
        let mut app = app(&settings);

        for _ in 0..ComponentCategory::ALL.len() {
            app.cycle_category();
            assert!(app.category_filter.is_some());
        }
        app.cycle_category();
        assert_eq!(app.category_filter, None);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.category_filter = Some(ComponentCategory::Form);

        app.move_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_index, 5);
        assert_eq!(app.selected_component().map(|m| m.slug.as_str()), Some("textarea"));
    }

    #[test]
    fn test_unavailable_action_is_ignored() {
        let settings = Settings::default();
        let mut app = app(&settings);

        app.wizard_action(WizardAction::Submit).unwrap();
        assert_eq!(app.wizard.current(), BenefitStep::PersonalInfo);
        assert!(app.status_message.is_some());

        app.wizard_action(WizardAction::Next).unwrap();
        assert_eq!(app.wizard.current(), BenefitStep::Household);
    }
}
