//! YAML Export functionality
//!
//! Exports the complete catalogue to YAML for human review.

use std::io::Write;

use crate::error::{DogwoodError, DogwoodResult};
use crate::export::json::CatalogueExport;
use crate::registry::Registry;

/// Export the full catalogue to YAML format
pub fn export_catalogue_yaml<W: Write>(registry: &Registry, writer: &mut W) -> DogwoodResult<()> {
    let export = CatalogueExport::from_registry(registry);

    let header = format!(
        "# Dogwood Design System Catalogue\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # Components, documentation entries, patterns, templates and color tokens.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| DogwoodError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| DogwoodError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> DogwoodResult<CatalogueExport> {
    let export: CatalogueExport =
        serde_yaml::from_str(yaml_str).map_err(|e| DogwoodError::Import(e.to_string()))?;

    export.validate().map_err(DogwoodError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_catalogue_yaml(Registry::builtin(), &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        assert!(yaml_string.starts_with("# Dogwood Design System Catalogue"));
        assert!(yaml_string.contains("slug: step-indicator"));
        assert!(yaml_string.contains("category: Data Display"));
    }

    #[test]
    fn test_yaml_import() {
        let mut output = Vec::new();
        export_catalogue_yaml(Registry::builtin(), &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        let imported = import_from_yaml(&yaml_string).unwrap();

        assert_eq!(imported.components.len(), 18);
        assert_eq!(imported.colors[0].name, "Blue Ridge");
    }

    #[test]
    fn test_yaml_import_rejects_garbage() {
        let err = import_from_yaml("components: 7").unwrap_err();
        assert!(matches!(err, DogwoodError::Import(_)));
    }
}
