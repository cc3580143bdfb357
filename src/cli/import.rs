//! CLI command for checking a catalogue export
//!
//! Reads a JSON or YAML export back in, validates it, and summarizes the
//! catalogue it describes.

use std::path::Path;

use crate::display::format_category_counts;
use crate::error::{DogwoodError, DogwoodResult};
use crate::export::{import_from_json, import_from_yaml};
use crate::registry::Registry;
use crate::services::ComponentCatalogue;

/// Load a registry from an export file; the extension picks the format
pub fn load_catalogue(path: &Path) -> DogwoodResult<Registry> {
    if !path.exists() {
        return Err(DogwoodError::Import(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| DogwoodError::Import(format!("Failed to read file: {}", e)))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "yaml" | "yml"))
        .unwrap_or(false);

    let export = if is_yaml {
        import_from_yaml(&content)?
    } else {
        import_from_json(&content)?
    };

    export.into_registry()
}

/// Handle `dogwood import`
pub fn handle_import_command(file: &Path) -> DogwoodResult<()> {
    let registry = load_catalogue(file)?;
    let catalogue = ComponentCatalogue::new(&registry);

    println!("Catalogue in '{}' is valid", file.display());
    println!("{}", "=".repeat(40));
    println!("  Components:      {}", catalogue.list_all().len());
    println!("  Documented:      {}", catalogue.list_documented().len());
    println!("  Patterns:        {}", registry.patterns().len());
    println!("  Templates:       {}", registry.templates().len());
    println!("  Color families:  {}", registry.colors().len());
    println!();
    print!("{}", format_category_counts(&catalogue.category_counts()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{export_catalogue_json, export_catalogue_yaml};
    use tempfile::TempDir;

    #[test]
    fn test_load_json_and_yaml_exports() {
        let temp = TempDir::new().unwrap();

        let json_path = temp.path().join("catalogue.json");
        let mut json = Vec::new();
        export_catalogue_json(Registry::builtin(), &mut json, false).unwrap();
        std::fs::write(&json_path, json).unwrap();

        let yaml_path = temp.path().join("catalogue.YML");
        let mut yaml = Vec::new();
        export_catalogue_yaml(Registry::builtin(), &mut yaml).unwrap();
        std::fs::write(&yaml_path, yaml).unwrap();

        for path in [json_path, yaml_path] {
            let registry = load_catalogue(&path).unwrap();
            assert_eq!(registry.components(), Registry::builtin().components());
            assert!(registry.entry("button").is_some());
        }
    }

    #[test]
    fn test_missing_file_is_import_error() {
        let temp = TempDir::new().unwrap();
        let err = load_catalogue(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DogwoodError::Import(_)));
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{\"schema_version\": \"1.0.0\"}").unwrap();

        let err = load_catalogue(&path).unwrap_err();
        assert!(matches!(err, DogwoodError::Import(_)));
    }
}
