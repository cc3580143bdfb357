//! Component display formatting
//!
//! Formats the component index as a table and a component documentation
//! page as a detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CatalogueEntry, ComponentCategory, ComponentMeta, PropDef};
use crate::services::ComponentPage;

use super::preview::format_preview;

#[derive(Tabled)]
struct ComponentRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Slug")]
    slug: &'a str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tier")]
    tier: u8,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Docs")]
    docs: &'static str,
}

#[derive(Tabled)]
struct PropRow<'a> {
    #[tabled(rename = "Prop")]
    name: String,
    #[tabled(rename = "Type")]
    prop_type: &'a str,
    #[tabled(rename = "Default")]
    default: &'a str,
    #[tabled(rename = "Description")]
    description: &'a str,
}

/// Format the component index; `documented` reports whether a slug has a page
pub fn format_component_table<F>(components: &[&ComponentMeta], documented: F) -> String
where
    F: Fn(&str) -> bool,
{
    if components.is_empty() {
        return "No components found.".to_string();
    }

    let rows = components.iter().map(|c| ComponentRow {
        name: &c.name,
        slug: &c.slug,
        category: c.category.to_string(),
        tier: c.tier.number(),
        status: c.status.to_string(),
        docs: if documented(&c.slug) { "yes" } else { "-" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n\n{} component(s)\n", table, components.len())
}

/// Format per-category component totals
pub fn format_category_counts(counts: &[(ComponentCategory, usize)]) -> String {
    let mut output = String::new();
    for (category, count) in counts {
        output.push_str(&format!("  {:<14} {}\n", category.to_string(), count));
    }
    output
}

/// Format a prop table
pub fn format_prop_table(props: &[PropDef]) -> String {
    if props.is_empty() {
        return "  (no props)\n".to_string();
    }

    let rows = props.iter().map(|p| PropRow {
        name: if p.required {
            format!("{}*", p.name)
        } else {
            p.name.clone()
        },
        prop_type: &p.prop_type,
        default: p.default.as_deref().unwrap_or("-"),
        description: &p.description,
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

fn format_bullets(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut output = format!("\n{}\n", title);
    for item in items {
        output.push_str(&format!("  - {}\n", item));
    }
    output
}

fn format_code(code: &str) -> String {
    code.lines().map(|l| format!("    {}\n", l)).collect()
}

fn format_entry(entry: &CatalogueEntry, show_guidance: bool) -> String {
    let mut output = String::new();

    output.push_str("\nPreview\n");
    output.push_str(&format_preview(&entry.default_preview));
    output.push('\n');
    output.push_str(&format_code(&entry.default_code));

    for variant in &entry.variants {
        output.push_str(&format!("\n{}\n", variant.title));
        output.push_str(&format_preview(&variant.preview));
        output.push('\n');
        output.push_str(&format_code(&variant.code));
    }

    output.push_str("\nProps\n");
    output.push_str(&format_prop_table(&entry.prop_definitions));

    output.push_str(&format_bullets("Accessibility", &entry.accessibility));

    if show_guidance {
        output.push_str(&format_bullets("Do", &entry.dos));
        output.push_str(&format_bullets("Don't", &entry.donts));
    }

    if let Some(usage) = &entry.usage_code {
        output.push_str("\nUsage\n");
        output.push_str(&format_code(usage));
    }

    output
}

/// Format a component documentation page
pub fn format_component_page(page: &ComponentPage<'_>, show_guidance: bool) -> String {
    let meta = page.meta;
    let mut output = String::new();

    output.push_str(&format!("{}\n", meta.name));
    output.push_str(&format!("  {}\n\n", meta.description));
    output.push_str(&format!("  Category: {}\n", meta.category));
    output.push_str(&format!("  Tier:     {}\n", meta.tier));
    output.push_str(&format!("  Status:   {}\n", meta.status));
    output.push_str(&format!("  Route:    {}\n", meta.route()));

    match page.entry {
        Some(entry) => output.push_str(&format_entry(entry, show_guidance)),
        None => output.push_str("\nDocumentation for this component is coming soon.\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ComponentCatalogue;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_component_table(&[], |_| false), "No components found.");
    }

    #[test]
    fn test_table_lists_components() {
        let catalogue = ComponentCatalogue::builtin();
        let components: Vec<_> = catalogue.list_all().iter().collect();
        let output =
            format_component_table(&components, |slug| catalogue.get_entry(slug).is_some());

        assert!(output.contains("Button"));
        assert!(output.contains("Data Display"));
        assert!(output.contains("18 component(s)"));
    }

    #[test]
    fn test_required_prop_marked() {
        let props = vec![PropDef::new("children", "ReactNode", "Content").required()];
        let output = format_prop_table(&props);
        assert!(output.contains("children*"));
    }

    #[test]
    fn test_page_with_entry() {
        let page = ComponentCatalogue::builtin().page("button").unwrap();
        let output = format_component_page(&page, true);

        assert!(output.contains("Route:    /components/button"));
        assert!(output.contains("Accessibility"));
        assert!(output.contains("Don't"));
        assert!(output.contains("Sizes"));
    }

    #[test]
    fn test_page_without_guidance() {
        let page = ComponentCatalogue::builtin().page("button").unwrap();
        let output = format_component_page(&page, false);
        assert!(!output.contains("\nDon't\n"));
    }

    #[test]
    fn test_page_coming_soon() {
        let page = ComponentCatalogue::builtin().page("tabs").unwrap();
        assert!(format_component_page(&page, true).contains("coming soon"));
    }
}
