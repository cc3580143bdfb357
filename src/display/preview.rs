//! Preview rendering
//!
//! Draws each preview element as a small text mock-up so a documentation
//! page can be read in a terminal.

use crate::models::preview::{AccordionMode, PreviewElement};
use crate::models::Preview;

/// Render every element of a preview, one block per element
pub fn format_preview(preview: &Preview) -> String {
    if preview.is_empty() {
        return "  (no preview)\n".to_string();
    }

    preview
        .elements
        .iter()
        .map(format_element)
        .collect::<Vec<_>>()
        .join("")
}

/// Render a single preview element
pub fn format_element(element: &PreviewElement) -> String {
    let mut output = String::new();

    match element {
        PreviewElement::Button(b) => {
            let mut flags = vec![b.variant.to_string(), b.size.to_string()];
            if b.disabled {
                flags.push("disabled".into());
            }
            if b.loading {
                flags.push("loading".into());
            }
            output.push_str(&format!("  [ {} ]  ({})\n", b.label, flags.join(", ")));
        }

        PreviewElement::Input(i) => {
            output.push_str(&format!("  {}\n", i.label));
            let content = i
                .value
                .as_deref()
                .or(i.placeholder.as_deref())
                .unwrap_or("");
            output.push_str(&format!("  [{:_<28}]\n", content));
            if let Some(error) = &i.error {
                output.push_str(&format!("  ! {}\n", error));
            } else if let Some(help) = &i.helper_text {
                output.push_str(&format!("  {}\n", help));
            }
        }

        PreviewElement::Select(s) => {
            output.push_str(&format!("  {}\n", s.label));
            let shown = s.placeholder.as_deref().unwrap_or("Select...");
            output.push_str(&format!("  [{:<26} v]\n", shown));
            for option in &s.options {
                output.push_str(&format!("     - {}\n", option.label));
            }
            if let Some(error) = &s.error {
                output.push_str(&format!("  ! {}\n", error));
            }
        }

        PreviewElement::Checkbox(c) => {
            let mark = if c.checked { "x" } else { " " };
            output.push_str(&format!("  [{}] {}\n", mark, c.label));
            if let Some(description) = &c.description {
                output.push_str(&format!("      {}\n", description));
            }
        }

        PreviewElement::RadioGroup(r) => {
            if let Some(label) = &r.label {
                output.push_str(&format!("  {}\n", label));
            }
            for option in &r.options {
                let mark = if r.selected.as_deref() == Some(option.value.as_str()) {
                    "*"
                } else {
                    " "
                };
                output.push_str(&format!("  ({}) {}\n", mark, option.label));
                if let Some(description) = &option.description {
                    output.push_str(&format!("      {}\n", description));
                }
            }
        }

        PreviewElement::TextArea(t) => {
            output.push_str(&format!("  {}\n", t.label));
            let first = t.placeholder.as_deref().unwrap_or("");
            for row in 0..t.rows.max(1) {
                let content = if row == 0 { first } else { "" };
                output.push_str(&format!("  |{:<30}|\n", content));
            }
            if let Some(max) = t.max_length.filter(|_| t.show_count) {
                output.push_str(&format!("  0/{}\n", max));
            }
            if let Some(error) = &t.error {
                output.push_str(&format!("  ! {}\n", error));
            }
        }

        PreviewElement::Alert(a) => {
            let title = a.title.as_deref().unwrap_or("");
            let close = if a.dismissible { "  [x]" } else { "" };
            output.push_str(&format!(
                "  {} {}{}\n",
                a.variant.to_string().to_uppercase(),
                title,
                close
            ));
            output.push_str(&format!("    {}\n", a.body));
        }

        PreviewElement::Card(c) => {
            output.push_str(&format!("  +- {}\n", c.title));
            if let Some(description) = &c.description {
                output.push_str(&format!("  |  {}\n", description));
            }
            if let Some(body) = &c.body {
                output.push_str(&format!("  |  {}\n", body));
            }
            for action in &c.actions {
                output.push_str(&format!("  |  [ {} ]\n", action));
            }
            output.push_str("  +-\n");
        }

        PreviewElement::Badge(b) => {
            output.push_str(&format!("  ({}) {}\n", b.label, b.variant));
        }

        PreviewElement::Table(t) => {
            output.push_str(&format!("  {}\n", t.headers.join(" | ")));
            for row in &t.rows {
                output.push_str(&format!("  {}\n", row.join(" | ")));
            }
        }

        PreviewElement::Breadcrumb(b) => {
            let trail: Vec<_> = b.items.iter().map(|c| c.label.as_str()).collect();
            output.push_str(&format!("  {}\n", trail.join(" / ")));
        }

        PreviewElement::Accordion(a) => {
            if a.mode == AccordionMode::Multiple {
                output.push_str("  (multiple sections may be open)\n");
            }
            for section in &a.sections {
                let marker = if section.open { "v" } else { ">" };
                output.push_str(&format!("  {} {}\n", marker, section.title));
                if section.open {
                    output.push_str(&format!("      {}\n", section.body));
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preview::{BadgePreview, BadgeVariant, ButtonPreview, CheckboxPreview};

    #[test]
    fn test_empty_preview() {
        assert!(format_preview(&Preview::default()).contains("no preview"));
    }

    #[test]
    fn test_button_flags() {
        let element = PreviewElement::Button(ButtonPreview {
            label: "Loading".into(),
            loading: true,
            ..Default::default()
        });
        let output = format_element(&element);
        assert!(output.contains("[ Loading ]"));
        assert!(output.contains("primary, md, loading"));
    }

    #[test]
    fn test_elements_render_in_order() {
        let preview = Preview::new(vec![
            PreviewElement::Checkbox(CheckboxPreview {
                label: "First".into(),
                ..Default::default()
            }),
            PreviewElement::Badge(BadgePreview {
                label: "Second".into(),
                variant: BadgeVariant::Success,
                ..Default::default()
            }),
        ]);

        let output = format_preview(&preview);
        let first = output.find("First").unwrap();
        let second = output.find("(Second) success").unwrap();
        assert!(first < second);
    }
}
