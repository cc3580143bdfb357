//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod color;
pub mod component;
pub mod export;
pub mod import;
pub mod log;
pub mod pattern;
pub mod template;
pub mod wizard;

pub use color::{handle_color_command, ColorCommands};
pub use component::{handle_component_command, ComponentCommands};
pub use export::{handle_export_command, ExportArgs};
pub use import::handle_import_command;
pub use log::handle_log_command;
pub use pattern::{handle_pattern_command, PatternCommands};
pub use template::{handle_template_command, TemplateCommands};
pub use wizard::handle_wizard_command;
