//! Catalogue entry model
//!
//! The documentation payload for one component: preview, usage code, prop
//! table, accessibility notes and guidance. Entries are keyed by the slug of
//! the matching `ComponentMeta` but stored separately from it.

use serde::{Deserialize, Serialize};

use super::preview::Preview;

/// One row of a component's prop table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDef {
    pub name: String,

    /// Type signature as written in the component API
    #[serde(rename = "type")]
    pub prop_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default)]
    pub required: bool,

    pub description: String,
}

impl PropDef {
    /// An optional prop with no default
    pub fn new(
        name: impl Into<String>,
        prop_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
            default: None,
            required: false,
            description: description.into(),
        }
    }

    /// Set the default value
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the prop as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// An additional titled preview (sizes, states, error state...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPreview {
    pub title: String,
    pub preview: Preview,
    pub code: String,
}

impl VariantPreview {
    pub fn new(
        title: impl Into<String>,
        preview: impl Into<Preview>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            preview: preview.into(),
            code: code.into(),
        }
    }
}

/// Documentation for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub default_preview: Preview,

    pub default_code: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantPreview>,

    pub prop_definitions: Vec<PropDef>,

    pub accessibility: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dos: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub donts: Vec<String>,

    /// Longer usage example shown below the prop table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_code: Option<String>,
}

impl CatalogueEntry {
    /// Look up a prop definition by name
    pub fn prop(&self, name: &str) -> Option<&PropDef> {
        self.prop_definitions.iter().find(|p| p.name == name)
    }

    /// Props that must be supplied
    pub fn required_props(&self) -> impl Iterator<Item = &PropDef> {
        self.prop_definitions.iter().filter(|p| p.required)
    }

    /// Whether any do/don't guidance is present
    pub fn has_guidance(&self) -> bool {
        !self.dos.is_empty() || !self.donts.is_empty()
    }
}
