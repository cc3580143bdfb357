//! Event handler for the TUI
//!
//! Routes keyboard events to the active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::WizardAction;

use super::app::{ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.switch_view();
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Catalogue => handle_catalogue_key(app, key),
        ActiveView::Wizard => handle_wizard_key(app, key),
    }
}

fn handle_catalogue_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::PageDown | KeyCode::Char('J') => app.scroll_detail_down(),
        KeyCode::PageUp | KeyCode::Char('K') => app.scroll_detail_up(),
        _ => {}
    }
    Ok(())
}

fn handle_wizard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let action = match key.code {
        KeyCode::Char('n') | KeyCode::Right | KeyCode::Enter => WizardAction::Next,
        KeyCode::Char('b') | KeyCode::Left | KeyCode::Backspace => WizardAction::Back,
        KeyCode::Char('s') => WizardAction::Submit,
        KeyCode::Char('r') => WizardAction::Restart,
        KeyCode::Char(c) if c.is_ascii_digit() => WizardAction::Edit(i64::from(c as u8 - b'0')),
        _ => return Ok(()),
    };

    app.wizard_action(action)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::BenefitStep;
    use crate::registry::Registry;
    use crate::services::WizardSession;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_wizard_keys_walk_the_application() {
        let settings = Settings::default();
        let wizard = WizardSession::start(None).unwrap();
        let mut app = App::new(Registry::builtin(), &settings, wizard);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, ActiveView::Wizard);

        for _ in 0..3 {
            press(&mut app, KeyCode::Char('n'));
        }
        assert_eq!(app.wizard.current(), BenefitStep::Review);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.wizard.current(), BenefitStep::Household);

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.wizard.current(), BenefitStep::Confirmation);
        assert!(app.wizard.confirmation().is_some());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.wizard.current(), BenefitStep::PersonalInfo);
    }

    #[test]
    fn test_c_cycles_category_only_in_catalogue() {
        let settings = Settings::default();
        let wizard = WizardSession::start(None).unwrap();
        let mut app = App::new(Registry::builtin(), &settings, wizard);

        press(&mut app, KeyCode::Char('c'));
        assert!(app.category_filter.is_some());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
