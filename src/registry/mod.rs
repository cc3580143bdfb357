//! Static catalogue data
//!
//! The registry is an immutable set of tables: the component index, the
//! documentation entries keyed by slug, the pattern and template listings and
//! the colour families. The built-in registry is constructed once per process
//! and shared read-only.

pub mod colors;
pub mod components;
pub mod entries;
pub mod patterns;
pub mod templates;

pub use colors::builtin_colors;
pub use components::builtin_components;
pub use entries::builtin_entries;
pub use patterns::builtin_patterns;
pub use templates::builtin_templates;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::error::{DogwoodError, DogwoodResult};
use crate::models::{CatalogueEntry, ColorFamily, ComponentMeta, PatternMeta, TemplateMeta};

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// All catalogue tables
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<ComponentMeta>,
    entries: HashMap<String, CatalogueEntry>,
    patterns: Vec<PatternMeta>,
    templates: Vec<TemplateMeta>,
    colors: Vec<ColorFamily>,
}

impl Registry {
    /// Build a registry from its tables, validating keys
    ///
    /// Every component record must be valid and have a unique slug, every
    /// entry must belong to a known component, and pattern slugs and colour
    /// family names must be unique.
    pub fn new(
        components: Vec<ComponentMeta>,
        entries: HashMap<String, CatalogueEntry>,
        patterns: Vec<PatternMeta>,
        templates: Vec<TemplateMeta>,
        colors: Vec<ColorFamily>,
    ) -> DogwoodResult<Self> {
        let mut slugs = HashSet::new();
        for component in &components {
            component
                .validate()
                .map_err(|e| DogwoodError::Validation(e.to_string()))?;

            if !slugs.insert(component.slug.as_str()) {
                return Err(DogwoodError::Duplicate {
                    entity_type: "Component",
                    identifier: component.slug.clone(),
                });
            }
        }

        if let Some(orphan) = entries.keys().find(|slug| !slugs.contains(slug.as_str())) {
            return Err(DogwoodError::Validation(format!(
                "Catalogue entry '{}' has no matching component",
                orphan
            )));
        }

        let mut pattern_slugs = HashSet::new();
        for pattern in &patterns {
            if !pattern_slugs.insert(pattern.slug.as_str()) {
                return Err(DogwoodError::Duplicate {
                    entity_type: "Pattern",
                    identifier: pattern.slug.clone(),
                });
            }
        }

        let mut families = HashSet::new();
        for family in &colors {
            if !families.insert(family.slug()) {
                return Err(DogwoodError::Duplicate {
                    entity_type: "Color family",
                    identifier: family.name.clone(),
                });
            }
        }

        Ok(Self {
            components,
            entries,
            patterns,
            templates,
            colors,
        })
    }

    /// The built-in Dogwood registry
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| Registry {
            components: builtin_components(),
            entries: builtin_entries(),
            patterns: builtin_patterns(),
            templates: builtin_templates(),
            colors: builtin_colors(),
        })
    }

    pub fn components(&self) -> &[ComponentMeta] {
        &self.components
    }

    /// Documentation entry for a slug, if one exists
    pub fn entry(&self, slug: &str) -> Option<&CatalogueEntry> {
        self.entries.get(slug)
    }

    pub fn entries(&self) -> &HashMap<String, CatalogueEntry> {
        &self.entries
    }

    pub fn patterns(&self) -> &[PatternMeta] {
        &self.patterns
    }

    pub fn templates(&self) -> &[TemplateMeta] {
        &self.templates
    }

    pub fn colors(&self) -> &[ColorFamily] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentCategory, ComponentStatus, Tier};

    fn meta(slug: &str) -> ComponentMeta {
        ComponentMeta::new(
            "Thing",
            slug,
            "A thing",
            ComponentCategory::Form,
            Tier::One,
            ComponentStatus::Stable,
        )
    }

    #[test]
    fn test_builtin_tables_validate() {
        let registry = Registry::new(
            builtin_components(),
            builtin_entries(),
            builtin_patterns(),
            builtin_templates(),
            builtin_colors(),
        );
        assert!(registry.is_ok());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = Registry::builtin() as *const Registry;
        let b = Registry::builtin() as *const Registry;
        assert_eq!(a, b);
        assert_eq!(Registry::builtin().components().len(), 18);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = Registry::new(
            vec![meta("button"), meta("button")],
            HashMap::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap_err();

        assert!(matches!(err, DogwoodError::Duplicate { .. }));
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let err = Registry::new(
            vec![meta("Not A Slug")],
            HashMap::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_orphan_entry_rejected() {
        let mut entries = builtin_entries();
        let button = entries.remove("button").unwrap();
        entries.insert("ghost-component".into(), button);

        let err = Registry::new(
            builtin_components(),
            entries,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_meta_without_entry_is_valid() {
        let registry = Registry::new(
            vec![meta("modal")],
            HashMap::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();

        assert!(registry.entry("modal").is_none());
    }
}
