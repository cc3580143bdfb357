//! Custom error types for Dogwood
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Library lookups never fail with these
//! errors; a missing catalogue entry is an `Option::None`. The variants here
//! cover the outer surfaces: files, exports and identifiers typed by a user.

use thiserror::Error;

/// The main error type for Dogwood operations
#[derive(Error, Debug)]
pub enum DogwoodError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for registry data and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate key errors (e.g. two components sharing a slug)
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors (unreadable or invalid catalogue exports)
    #[error("Import error: {0}")]
    Import(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DogwoodError {
    /// Create a "not found" error for components
    pub fn component_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Component",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for patterns
    pub fn pattern_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Pattern",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for template categories
    pub fn template_category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Template category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for colour families
    pub fn color_family_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Color family",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DogwoodError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DogwoodError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DogwoodError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for Dogwood operations
pub type DogwoodResult<T> = Result<T, DogwoodError>;
