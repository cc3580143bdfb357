//! Status bar view
//!
//! Shows the active filter or wizard step, the last status message, and
//! key hints for the active view.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    let context = match app.active_view {
        ActiveView::Catalogue => {
            let category = app
                .category_filter
                .map(|c| c.to_string())
                .unwrap_or_else(|| "All".to_string());
            format!(" {} ({}) ", category, app.visible_components().len())
        }
        ActiveView::Wizard => {
            let wizard = app.wizard.controller();
            format!(" Step {}/{} ", wizard.current_step(), wizard.total_steps())
        }
    };
    spans.push(Span::styled(context, Style::default().fg(Color::Cyan)));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.active_view {
        ActiveView::Catalogue => " j/k:Move  c:Category  J/K:Scroll  Tab:Wizard  q:Quit ",
        ActiveView::Wizard => {
            " n:Next  b:Back  1-3:Edit  s:Submit  r:Restart  Tab:Catalogue  q:Quit "
        }
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
