//! Export module for Dogwood
//!
//! Provides catalogue export in multiple formats:
//! - JSON: machine-readable full catalogue, importable
//! - YAML: human-readable full catalogue, importable
//! - CSV: component index and colour tokens (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_colors_csv, export_components_csv};
pub use json::{export_catalogue_json, import_from_json, CatalogueExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_catalogue_yaml, import_from_yaml};
