//! JSON Export functionality
//!
//! Exports the complete catalogue to JSON format with schema versioning.
//! An export can be read back and rebuilt into a `Registry`.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DogwoodError, DogwoodResult};
use crate::models::{CatalogueEntry, ColorFamily, ComponentMeta, PatternMeta, TemplateMeta};
use crate::registry::Registry;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full catalogue export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub components: Vec<ComponentMeta>,

    /// Documentation entries keyed by slug, sorted for stable output
    pub entries: BTreeMap<String, CatalogueEntry>,

    pub patterns: Vec<PatternMeta>,

    pub templates: Vec<TemplateMeta>,

    pub colors: Vec<ColorFamily>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub component_count: usize,
    pub documented_count: usize,
    pub pattern_count: usize,
    pub template_count: usize,
    pub color_family_count: usize,
}

impl CatalogueExport {
    /// Snapshot a registry
    pub fn from_registry(registry: &Registry) -> Self {
        let entries: BTreeMap<_, _> = registry
            .entries()
            .iter()
            .map(|(slug, entry)| (slug.clone(), entry.clone()))
            .collect();

        let metadata = ExportMetadata {
            component_count: registry.components().len(),
            documented_count: entries.len(),
            pattern_count: registry.patterns().len(),
            template_count: registry.templates().len(),
            color_family_count: registry.colors().len(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            components: registry.components().to_vec(),
            entries,
            patterns: registry.patterns().to_vec(),
            templates: registry.templates().to_vec(),
            colors: registry.colors().to_vec(),
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let counted = ExportMetadata {
            component_count: self.components.len(),
            documented_count: self.entries.len(),
            pattern_count: self.patterns.len(),
            template_count: self.templates.len(),
            color_family_count: self.colors.len(),
        };
        if counted != self.metadata {
            return Err("Metadata counts do not match the exported tables".to_string());
        }

        if let Some(family) = self.colors.iter().find(|f| f.scale.len() != 11) {
            return Err(format!(
                "Color family {} has {} shades, expected 11",
                family.name,
                family.scale.len()
            ));
        }

        // Key integrity is checked by building a registry
        self.clone().into_registry().map(|_| ()).map_err(|e| e.to_string())
    }

    /// Rebuild a registry from the export
    pub fn into_registry(self) -> DogwoodResult<Registry> {
        Registry::new(
            self.components,
            self.entries.into_iter().collect(),
            self.patterns,
            self.templates,
            self.colors,
        )
    }
}

/// Export the full catalogue to JSON
pub fn export_catalogue_json<W: Write>(
    registry: &Registry,
    writer: &mut W,
    pretty: bool,
) -> DogwoodResult<()> {
    let export = CatalogueExport::from_registry(registry);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| DogwoodError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> DogwoodResult<CatalogueExport> {
    let export: CatalogueExport =
        serde_json::from_str(json_str).map_err(|e| DogwoodError::Import(e.to_string()))?;

    export.validate().map_err(DogwoodError::Import)?;

    Ok(export)
}
