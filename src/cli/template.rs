//! Template CLI commands

use clap::Subcommand;

use crate::display::listing::format_template_groups;
use crate::error::{DogwoodError, DogwoodResult};
use crate::models::TemplateCategory;
use crate::registry::Registry;
use crate::services::{TemplateGroup, TemplateService};

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List templates grouped by category
    List {
        /// Only show one category (essentials, citizen)
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle a template command
pub fn handle_template_command(registry: &Registry, cmd: TemplateCommands) -> DogwoodResult<()> {
    let service = TemplateService::new(registry);

    match cmd {
        TemplateCommands::List { category: None } => {
            print!("{}", format_template_groups(&service.grouped()));
        }
        TemplateCommands::List {
            category: Some(name),
        } => {
            let category = TemplateCategory::parse(&name)
                .ok_or_else(|| DogwoodError::template_category_not_found(&name))?;
            let group = TemplateGroup {
                category,
                templates: service.list_by_category(category),
            };
            print!("{}", format_template_groups(&[group]));
        }
    }

    Ok(())
}
