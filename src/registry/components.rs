//! Built-in component index
//!
//! Declaration order here is the order every listing shows.

use crate::models::{ComponentCategory, ComponentMeta, ComponentStatus, Tier};

/// Every component of the design system, tier 1 first
pub fn builtin_components() -> Vec<ComponentMeta> {
    use ComponentCategory::*;
    use ComponentStatus::*;

    let rows: [(&str, &str, &str, ComponentCategory, Tier, ComponentStatus); 18] = [
        (
            "Button",
            "button",
            "Triggers actions and navigates users. Supports multiple variants and sizes.",
            Form,
            Tier::One,
            Stable,
        ),
        (
            "Input",
            "input",
            "Single-line text input with labels, help text, and validation states.",
            Form,
            Tier::One,
            Stable,
        ),
        (
            "Select",
            "select",
            "Dropdown selection from a predefined list of options.",
            Form,
            Tier::One,
            Stable,
        ),
        (
            "Checkbox",
            "checkbox",
            "Allows users to select one or more options from a set.",
            Form,
            Tier::One,
            Stable,
        ),
        (
            "Radio",
            "radio",
            "Allows users to select exactly one option from a set.",
            Form,
            Tier::One,
            Stable,
        ),
        (
            "TextArea",
            "textarea",
            "Multi-line text input for longer form content.",
            Form,
            Tier::One,
            Stable,
        ),
        (
            "Alert",
            "alert",
            "Communicates important information with contextual severity levels.",
            Feedback,
            Tier::One,
            Stable,
        ),
        (
            "Card",
            "card",
            "Container for grouping related content and actions.",
            Layout,
            Tier::One,
            Stable,
        ),
        (
            "Badge",
            "badge",
            "Small label for status, category, or count indicators.",
            DataDisplay,
            Tier::One,
            Stable,
        ),
        (
            "Table",
            "table",
            "Displays structured data in rows and columns.",
            DataDisplay,
            Tier::One,
            Stable,
        ),
        (
            "Breadcrumb",
            "breadcrumb",
            "Shows the user's current location in a navigational hierarchy.",
            Navigation,
            Tier::One,
            Stable,
        ),
        (
            "Accordion",
            "accordion",
            "Expandable sections for organizing content under collapsible headers.",
            Layout,
            Tier::One,
            Stable,
        ),
        // Used by the page templates; documentation pages not written yet.
        (
            "Step Indicator",
            "step-indicator",
            "Shows progress through a multi-step process.",
            Navigation,
            Tier::Two,
            Beta,
        ),
        (
            "Gov Banner",
            "gov-banner",
            "Official government website banner shown above the header.",
            Layout,
            Tier::Two,
            Beta,
        ),
        (
            "Footer",
            "footer",
            "Site footer with link groups and agency information.",
            Layout,
            Tier::Two,
            Beta,
        ),
        (
            "Side Navigation",
            "side-navigation",
            "Vertical list of links to the sections of a service.",
            Navigation,
            Tier::Two,
            Planned,
        ),
        (
            "Tabs",
            "tabs",
            "Switches between related views within the same context.",
            Navigation,
            Tier::Two,
            Planned,
        ),
        (
            "Pagination",
            "pagination",
            "Navigates between pages of long result sets.",
            Navigation,
            Tier::Three,
            Planned,
        ),
    ];

    rows.into_iter()
        .map(|(name, slug, description, category, tier, status)| {
            ComponentMeta::new(name, slug, description, category, tier, status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique_and_valid() {
        let components = builtin_components();
        let slugs: HashSet<_> = components.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs.len(), components.len());
        assert!(components.iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_tier_one_is_stable() {
        let components = builtin_components();
        let tier_one: Vec<_> = components.iter().filter(|c| c.tier == Tier::One).collect();
        assert_eq!(tier_one.len(), 12);
        assert!(tier_one.iter().all(|c| c.status == ComponentStatus::Stable));
    }
}
