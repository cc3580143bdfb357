//! Layout definitions for the TUI
//!
//! A tab bar across the top, the active view, and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// View tabs
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the catalogue view: component list beside its page
pub struct CatalogueLayout {
    pub list: Rect,
    pub detail: Rect,
}

impl CatalogueLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(34), // Component list
                Constraint::Min(40),    // Documentation page
            ])
            .split(area);

        Self {
            list: chunks[0],
            detail: chunks[1],
        }
    }
}

/// Layout for the wizard view
pub struct WizardLayout {
    /// Step indicator
    pub indicator: Rect,
    /// Step body
    pub body: Rect,
    /// Offered actions
    pub actions: Rect,
}

impl WizardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            indicator: chunks[0],
            body: chunks[1],
            actions: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = AppLayout::new(area);
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.height, 36);
    }
}
