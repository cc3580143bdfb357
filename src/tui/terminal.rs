//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::audit::AuditLogger;
use crate::config::paths::DogwoodPaths;
use crate::config::settings::Settings;
use crate::registry::Registry;
use crate::services::WizardSession;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(registry: &Registry, settings: &Settings, paths: &DogwoodPaths) -> Result<()> {
    let logger = if settings.audit_enabled {
        paths.ensure_directories()?;
        Some(AuditLogger::new(paths.audit_log()))
    } else {
        None
    };
    let wizard = WizardSession::start(logger)?;

    let mut terminal = init_terminal()?;
    let mut app = App::new(registry, settings, wizard);
    let events = EventHandler::default();

    let outcome = event_loop(&mut terminal, &mut app, &events);

    // Leave the alternate screen even when the loop failed
    restore_terminal()?;
    outcome
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;
    }
    Ok(())
}
