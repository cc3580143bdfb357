//! CLI command for catalogue export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::{ExportFormat, Settings};
use crate::error::{DogwoodError, DogwoodResult};
use crate::export::{csv, json, yaml};
use crate::registry::Registry;

/// Arguments of `dogwood export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// With CSV, export colour tokens instead of components
    #[arg(long)]
    pub colors: bool,
}

fn write_export<W: Write>(
    registry: &Registry,
    format: ExportFormat,
    args: &ExportArgs,
    writer: &mut W,
) -> DogwoodResult<()> {
    match format {
        ExportFormat::Json => json::export_catalogue_json(registry, writer, args.pretty)?,
        ExportFormat::Yaml => yaml::export_catalogue_yaml(registry, writer)?,
        ExportFormat::Csv if args.colors => csv::export_colors_csv(registry, writer)?,
        ExportFormat::Csv => csv::export_components_csv(registry, writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Handle `dogwood export`
pub fn handle_export_command(
    registry: &Registry,
    settings: &Settings,
    args: ExportArgs,
) -> DogwoodResult<()> {
    let format = args.format.unwrap_or(settings.default_export_format);

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                DogwoodError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(registry, format, &args, &mut writer)?;
            eprintln!("Catalogue exported to: {}", output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(registry, format, &args, &mut writer)?;
        }
    }

    Ok(())
}
