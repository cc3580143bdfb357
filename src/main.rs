use anyhow::Result;
use clap::{Parser, Subcommand};

use std::path::PathBuf;

use dogwood::audit::AuditLogger;
use dogwood::cli::{
    handle_color_command, handle_component_command, handle_export_command,
    handle_import_command, handle_log_command, handle_pattern_command, handle_template_command,
    handle_wizard_command,
};
use dogwood::config::{paths::DogwoodPaths, settings::Settings};
use dogwood::registry::Registry;

#[derive(Parser)]
#[command(
    name = "dogwood",
    author = "Kaylee Beyene",
    version,
    about = "Terminal catalogue for the Dogwood government design system",
    long_about = "Dogwood is a design system for state government services. This tool \
                  browses its component catalogue, patterns, page templates and colour \
                  tokens, and walks through the reference benefit application wizard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Component catalogue commands
    #[command(subcommand, alias = "component")]
    Components(dogwood::cli::ComponentCommands),

    /// Design pattern commands
    #[command(subcommand, alias = "pattern")]
    Patterns(dogwood::cli::PatternCommands),

    /// Page template commands
    #[command(subcommand, alias = "template")]
    Templates(dogwood::cli::TemplateCommands),

    /// Colour token commands
    #[command(subcommand, alias = "colours")]
    Colors(dogwood::cli::ColorCommands),

    /// Walk through the benefit application wizard
    Wizard,

    /// Export the catalogue
    Export(dogwood::cli::ExportArgs),

    /// Validate a JSON or YAML catalogue export
    Import {
        /// Path to the export file
        file: PathBuf,
    },

    /// Show recorded wizard activity
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only show one session (full id or `ses-` prefix)
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Write default settings to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DogwoodPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let registry = Registry::builtin();

    match cli.command {
        Some(Commands::Tui) => {
            dogwood::tui::run_tui(registry, &settings, &paths)?;
        }
        Some(Commands::Components(cmd)) => {
            handle_component_command(registry, &settings, cmd)?;
        }
        Some(Commands::Patterns(cmd)) => {
            handle_pattern_command(registry, cmd)?;
        }
        Some(Commands::Templates(cmd)) => {
            handle_template_command(registry, cmd)?;
        }
        Some(Commands::Colors(cmd)) => {
            handle_color_command(registry, cmd)?;
        }
        Some(Commands::Wizard) => {
            handle_wizard_command(&paths, &settings)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(registry, &settings, args)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&file)?;
        }
        Some(Commands::Log { limit, session }) => {
            handle_log_command(&paths, limit, session.as_deref())?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Dogwood Configuration");
            println!("=====================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Include planned components: {}", settings.include_planned);
            println!("  Show usage guidance:        {}", settings.show_guidance);
            println!("  Audit wizard activity:      {}", settings.audit_enabled);
            println!("  Default export format:      {:?}", settings.default_export_format);
            println!();

            let audit = AuditLogger::new(paths.audit_log());
            if audit.exists() {
                println!("Audit entries: {}", audit.entry_count()?);
            } else {
                println!("Audit entries: none");
            }
        }
        None => {
            println!("Dogwood - government design system catalogue");
            println!();
            println!("Run 'dogwood --help' for usage information.");
            println!("Run 'dogwood components list' to browse components.");
            println!("Run 'dogwood tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
