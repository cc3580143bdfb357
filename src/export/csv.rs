//! CSV Export functionality
//!
//! Exports the component index and the colour tokens to CSV.

use std::io::Write;

use serde::Serialize;

use crate::error::{DogwoodError, DogwoodResult};
use crate::registry::Registry;

#[derive(Serialize)]
struct ComponentRecord<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Slug")]
    slug: &'a str,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Tier")]
    tier: u8,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Route")]
    route: String,
    #[serde(rename = "Documented")]
    documented: bool,
    #[serde(rename = "Props")]
    props: usize,
    #[serde(rename = "Description")]
    description: &'a str,
}

#[derive(Serialize)]
struct ColorRecord<'a> {
    #[serde(rename = "Family")]
    family: &'a str,
    #[serde(rename = "Shade")]
    shade: u16,
    #[serde(rename = "Token")]
    token: String,
    #[serde(rename = "Hex")]
    hex: &'a str,
}

fn export_error(e: impl std::fmt::Display) -> DogwoodError {
    DogwoodError::Export(e.to_string())
}

/// Export the component index to CSV
pub fn export_components_csv<W: Write>(registry: &Registry, writer: &mut W) -> DogwoodResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for meta in registry.components() {
        let entry = registry.entry(&meta.slug);
        csv_writer
            .serialize(ComponentRecord {
                name: &meta.name,
                slug: &meta.slug,
                category: meta.category.to_string(),
                tier: meta.tier.number(),
                status: meta.status.to_string(),
                route: meta.route(),
                documented: entry.is_some(),
                props: entry.map_or(0, |e| e.prop_definitions.len()),
                description: &meta.description,
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

/// Export every colour token to CSV
pub fn export_colors_csv<W: Write>(registry: &Registry, writer: &mut W) -> DogwoodResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for family in registry.colors() {
        for (shade, hex) in family.scale.iter() {
            csv_writer
                .serialize(ColorRecord {
                    family: &family.name,
                    shade: shade.step(),
                    token: family.token(shade),
                    hex,
                })
                .map_err(export_error)?;
        }
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
