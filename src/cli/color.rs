//! Colour token CLI commands

use clap::Subcommand;

use crate::display::color::{format_color_families, format_color_family, format_color_token};
use crate::error::{DogwoodError, DogwoodResult};
use crate::models::Shade;
use crate::registry::Registry;
use crate::services::TokenService;

/// Colour subcommands
#[derive(Subcommand)]
pub enum ColorCommands {
    /// List colour families
    List,

    /// Show a family's scale, or a single shade
    Show {
        /// Family name or token prefix (e.g. "blue-ridge")
        family: String,
        /// Shade step (50, 100, ... 900, 950)
        #[arg(short, long)]
        shade: Option<u16>,
    },

    /// Find tokens by hex value
    Find {
        /// Hex colour, with or without '#'
        hex: String,
    },
}

/// Handle a colour command
pub fn handle_color_command(registry: &Registry, cmd: ColorCommands) -> DogwoodResult<()> {
    let service = TokenService::new(registry);

    match cmd {
        ColorCommands::List => print!("{}", format_color_families(service.list())),

        ColorCommands::Show {
            family,
            shade: None,
        } => {
            let found = service
                .find_family(&family)
                .ok_or_else(|| DogwoodError::color_family_not_found(&family))?;
            print!("{}", format_color_family(found));
        }

        ColorCommands::Show {
            family,
            shade: Some(step),
        } => {
            if service.find_family(&family).is_none() {
                return Err(DogwoodError::color_family_not_found(&family));
            }
            let token = service.shade(&family, step).ok_or_else(|| {
                DogwoodError::Validation(format!(
                    "{} is not a shade step. Expected one of: {:?}",
                    step,
                    Shade::STEPS
                ))
            })?;
            print!("{}", format_color_token(&token));
        }

        ColorCommands::Find { hex } => {
            let tokens = service.find_hex(&hex);
            if tokens.is_empty() {
                println!("No tokens use {}.", hex);
            }
            for token in tokens {
                print!("{}", format_color_token(&token));
            }
        }
    }

    Ok(())
}
