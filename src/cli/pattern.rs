//! Pattern CLI commands

use clap::Subcommand;

use crate::display::listing::{format_pattern_details, format_pattern_list};
use crate::error::{DogwoodError, DogwoodResult};
use crate::registry::Registry;
use crate::services::PatternService;

/// Pattern subcommands
#[derive(Subcommand)]
pub enum PatternCommands {
    /// List all patterns
    List,

    /// Show a pattern
    Show {
        /// Pattern slug
        slug: String,
    },
}

/// Handle a pattern command
pub fn handle_pattern_command(registry: &Registry, cmd: PatternCommands) -> DogwoodResult<()> {
    let service = PatternService::new(registry);

    match cmd {
        PatternCommands::List => print!("{}", format_pattern_list(service.list())),
        PatternCommands::Show { slug } => {
            let pattern = service
                .get(&slug)
                .ok_or_else(|| DogwoodError::pattern_not_found(&slug))?;
            print!("{}", format_pattern_details(pattern));
        }
    }

    Ok(())
}
