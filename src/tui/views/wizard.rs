//! Benefit application wizard view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::{action_label, format_step_indicator, format_wizard_screen};
use crate::models::{BenefitStep, WizardStep};
use crate::tui::app::App;
use crate::tui::layout::WizardLayout;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = WizardLayout::new(area);
    let wizard = app.wizard.controller();

    let indicator = Paragraph::new(format_step_indicator(&wizard.step_statuses()))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(indicator, layout.indicator);

    // Skip the indicator line and blank line that head the screen text
    let screen = format_wizard_screen(wizard, app.wizard.confirmation());
    let body: String = screen
        .lines()
        .skip(2)
        .collect::<Vec<_>>()
        .join("\n");

    let block = Block::default()
        .title(format!(" {} ", wizard.current().heading()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(body).block(block).wrap(Wrap { trim: false }),
        layout.body,
    );

    let mut spans = vec![];
    for (i, action) in wizard.available_actions().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            action_label::<BenefitStep>(action),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        layout.actions,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::WizardAction;
    use crate::registry::Registry;
    use crate::services::WizardSession;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_heading_and_actions() {
        let settings = Settings::default();
        let wizard = WizardSession::start(None).unwrap();
        let mut app = App::new(Registry::builtin(), &settings, wizard);

        let text = screen_text(&mut app);
        assert!(text.contains("Personal Information"));
        assert!(text.contains("Next Step"));

        for _ in 0..3 {
            app.wizard_action(WizardAction::Next).unwrap();
        }
        let text = screen_text(&mut app);
        assert!(text.contains("Review Your Application"));
        assert!(text.contains("Submit Application"));
        assert!(text.contains("Edit Household"));
    }
}
