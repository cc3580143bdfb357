//! User settings for Dogwood
//!
//! Controls which catalogue records listings show, whether guidance is
//! printed, whether wizard sessions are audited, and the default export
//! format.

use serde::{Deserialize, Serialize};

use super::paths::DogwoodPaths;
use crate::error::DogwoodError;

/// Output format for catalogue exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full catalogue as JSON (default)
    #[default]
    Json,
    /// Full catalogue as YAML
    Yaml,
    /// Component table as CSV
    Csv,
}

impl ExportFormat {
    /// File extension used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Csv => "csv",
        }
    }
}

/// User settings for Dogwood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether component listings include `planned` components
    #[serde(default = "default_true")]
    pub include_planned: bool,

    /// Whether component details print do/don't guidance
    #[serde(default = "default_true")]
    pub show_guidance: bool,

    /// Whether wizard transitions are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Format used by `dogwood export` when none is given
    #[serde(default)]
    pub default_export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            include_planned: true,
            show_guidance: true,
            audit_enabled: true,
            default_export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DogwoodPaths) -> Result<Self, DogwoodError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DogwoodError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DogwoodError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DogwoodPaths) -> Result<(), DogwoodError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DogwoodError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DogwoodError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.include_planned);
        assert!(settings.show_guidance);
        assert!(settings.audit_enabled);
        assert_eq!(settings.default_export_format, ExportFormat::Json);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DogwoodPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            include_planned: false,
            default_export_format: ExportFormat::Yaml,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.include_planned);
        assert_eq!(loaded.default_export_format, ExportFormat::Yaml);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"audit_enabled": false}"#).unwrap();
        assert!(!loaded.audit_enabled);
        assert!(loaded.include_planned);
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_export_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
    }
}
