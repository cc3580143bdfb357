//! TUI Views module
//!
//! The component catalogue and the benefit application wizard, plus the
//! tab bar and status bar around them.

pub mod catalogue;
pub mod status_bar;
pub mod wizard;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveView, App};
use super::layout::AppLayout;

const VIEWS: [ActiveView; 2] = [ActiveView::Catalogue, ActiveView::Wizard];

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Catalogue => catalogue::render(frame, app, layout.main),
        ActiveView::Wizard => wizard::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let selected = VIEWS
        .iter()
        .position(|v| *v == app.active_view)
        .unwrap_or(0);

    let tabs = Tabs::new(VIEWS.iter().map(|v| v.title()))
        .block(
            Block::default()
                .title(" Dogwood ")
                .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}
