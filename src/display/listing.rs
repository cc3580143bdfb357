//! Pattern and template listing formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::PatternMeta;
use crate::services::TemplateGroup;

#[derive(Tabled)]
struct PatternRow<'a> {
    #[tabled(rename = "Pattern")]
    title: &'a str,
    #[tabled(rename = "Slug")]
    slug: &'a str,
    #[tabled(rename = "Status")]
    status: &'static str,
}

fn availability(available: bool) -> &'static str {
    if available {
        "available"
    } else {
        "coming soon"
    }
}

/// Format the patterns overview as a table
pub fn format_pattern_list(patterns: &[PatternMeta]) -> String {
    if patterns.is_empty() {
        return "No patterns found.".to_string();
    }

    let rows = patterns.iter().map(|p| PatternRow {
        title: &p.title,
        slug: &p.slug,
        status: availability(p.available),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a single pattern
pub fn format_pattern_details(pattern: &PatternMeta) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", pattern.title));
    output.push_str(&format!("  Slug:   {}\n", pattern.slug));
    output.push_str(&format!("  Status: {}\n", availability(pattern.available)));
    output.push_str(&format!("\n  {}\n", pattern.description));
    output
}

/// Format templates under their category headings
pub fn format_template_groups(groups: &[TemplateGroup<'_>]) -> String {
    if groups.is_empty() {
        return "No templates found.".to_string();
    }

    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        output.push_str(&format!("{}\n", group.category));

        for (j, template) in group.templates.iter().enumerate() {
            let is_last = j == group.templates.len() - 1;
            let prefix = if is_last { "└── " } else { "├── " };
            output.push_str(&format!(
                "  {}{} ({})\n",
                prefix,
                template.title,
                availability(template.available)
            ));
            let indent = if is_last { "    " } else { "│   " };
            output.push_str(&format!("  {}{}\n", indent, template.description));
        }

        if i < groups.len() - 1 {
            output.push('\n');
        }
    }

    output
}
