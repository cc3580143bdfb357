//! Component catalogue view
//!
//! The filtered component list on the left and the selected component's
//! documentation page on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::display::format_component_page;
use crate::models::ComponentStatus;
use crate::services::ComponentCatalogue;
use crate::tui::app::App;
use crate::tui::layout::CatalogueLayout;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = CatalogueLayout::new(area);
    render_list(frame, app, layout.list);
    render_detail(frame, app, layout.detail);
}

fn status_color(status: ComponentStatus) -> Color {
    match status {
        ComponentStatus::Stable => Color::Green,
        ComponentStatus::Beta => Color::Yellow,
        ComponentStatus::Planned => Color::DarkGray,
    }
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let catalogue = ComponentCatalogue::new(app.registry);
    let components = app.visible_components();

    let items: Vec<ListItem> = components
        .iter()
        .map(|meta| {
            let marker = if catalogue.get_entry(&meta.slug).is_some() {
                "•"
            } else {
                " "
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(
                    format!("{:<18}", meta.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    meta.status.to_string(),
                    Style::default().fg(status_color(meta.status)),
                ),
            ]))
        })
        .collect();

    let title = match app.category_filter {
        Some(category) => format!(" {} ", category),
        None => " Components ".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !components.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let text = match app.selected_component() {
        Some(meta) => {
            let catalogue = ComponentCatalogue::new(app.registry);
            catalogue
                .page(&meta.slug)
                .map(|page| format_component_page(&page, app.settings.show_guidance))
                .unwrap_or_default()
        }
        None => "No components in this category.".to_string(),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}
