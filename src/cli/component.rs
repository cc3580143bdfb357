//! Component CLI commands
//!
//! Implements `dogwood components list` and `dogwood components show`.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::component::{
    format_category_counts, format_component_page, format_component_table,
};
use crate::error::{DogwoodError, DogwoodResult};
use crate::models::{ComponentCategory, ComponentStatus, Tier};
use crate::registry::Registry;
use crate::services::{ComponentCatalogue, ComponentFilter};

/// Component subcommands
#[derive(Subcommand)]
pub enum ComponentCommands {
    /// List components, optionally filtered
    List {
        /// Category (form, feedback, layout, navigation, data-display)
        #[arg(short, long)]
        category: Option<String>,
        /// Tier (1, 2 or 3)
        #[arg(short, long)]
        tier: Option<u8>,
        /// Status (stable, beta, planned)
        #[arg(short, long)]
        status: Option<String>,
        /// Show per-category totals instead of the table
        #[arg(long)]
        counts: bool,
    },

    /// Show a component's documentation page
    Show {
        /// Component slug or name
        slug: String,
    },
}

/// Parse the list filters typed at the command line
pub fn parse_filter(
    category: Option<&str>,
    tier: Option<u8>,
    status: Option<&str>,
) -> DogwoodResult<ComponentFilter> {
    let category = category
        .map(|c| {
            ComponentCategory::parse(c).ok_or_else(|| {
                DogwoodError::Validation(format!(
                    "Unknown category '{}'. Expected one of: {}",
                    c,
                    ComponentCategory::ALL
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
        })
        .transpose()?;

    let tier = tier
        .map(|t| {
            Tier::try_from(t).map_err(|_| {
                DogwoodError::Validation(format!("Unknown tier {}. Expected 1, 2 or 3", t))
            })
        })
        .transpose()?;

    let status = status
        .map(|s| {
            ComponentStatus::parse(s).ok_or_else(|| {
                DogwoodError::Validation(format!(
                    "Unknown status '{}'. Expected stable, beta or planned",
                    s
                ))
            })
        })
        .transpose()?;

    Ok(ComponentFilter {
        category,
        tier,
        status,
        exclude_planned: false,
    })
}

/// Handle a component command
pub fn handle_component_command(
    registry: &Registry,
    settings: &Settings,
    cmd: ComponentCommands,
) -> DogwoodResult<()> {
    let catalogue = ComponentCatalogue::new(registry);

    match cmd {
        ComponentCommands::List {
            category,
            tier,
            status,
            counts,
        } => {
            if counts {
                print!("{}", format_category_counts(&catalogue.category_counts()));
                return Ok(());
            }

            let mut filter = parse_filter(category.as_deref(), tier, status.as_deref())?;
            // An explicit status filter wins over the setting
            filter.exclude_planned = !settings.include_planned && filter.status.is_none();

            let components = catalogue.filter(&filter);
            println!(
                "{}",
                format_component_table(&components, |slug| catalogue.get_entry(slug).is_some())
            );
        }

        ComponentCommands::Show { slug } => {
            let meta = catalogue
                .find(&slug)
                .ok_or_else(|| DogwoodError::component_not_found(&slug))?;

            if let Some(page) = catalogue.page(&meta.slug) {
                print!("{}", format_component_page(&page, settings.show_guidance));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        let filter = parse_filter(Some("data-display"), Some(1), Some("stable")).unwrap();
        assert_eq!(filter.category, Some(ComponentCategory::DataDisplay));
        assert_eq!(filter.tier, Some(Tier::One));
        assert_eq!(filter.status, Some(ComponentStatus::Stable));
    }

    #[test]
    fn test_parse_filter_rejects_unknown_values() {
        assert!(parse_filter(Some("widgets"), None, None).unwrap_err().is_validation());
        assert!(parse_filter(None, Some(4), None).unwrap_err().is_validation());
        assert!(parse_filter(None, None, Some("retired")).unwrap_err().is_validation());
    }

    #[test]
    fn test_show_unknown_component() {
        let err = handle_component_command(
            Registry::builtin(),
            &Settings::default(),
            ComponentCommands::Show {
                slug: "nonexistent-slug".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
