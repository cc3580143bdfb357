//! Component catalogue service
//!
//! Keyed lookup from slug to documentation entry, plus order-preserving
//! filters over the component index. A slug with no entry is a normal state
//! (the component is listed but has no page yet), so lookups return `Option`.

use crate::models::{CatalogueEntry, ComponentCategory, ComponentMeta, ComponentStatus, Tier};
use crate::registry::Registry;

/// Service for querying the component catalogue
pub struct ComponentCatalogue<'a> {
    registry: &'a Registry,
}

/// What a component documentation page shows
#[derive(Debug, Clone, Copy)]
pub struct ComponentPage<'a> {
    pub meta: &'a ComponentMeta,
    pub entry: Option<&'a CatalogueEntry>,
}

impl ComponentPage<'_> {
    pub fn is_documented(&self) -> bool {
        self.entry.is_some()
    }
}

/// Criteria for narrowing a component listing; unset fields match anything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    pub category: Option<ComponentCategory>,
    pub tier: Option<Tier>,
    pub status: Option<ComponentStatus>,
    pub exclude_planned: bool,
}

impl ComponentFilter {
    pub fn matches(&self, meta: &ComponentMeta) -> bool {
        self.category.map_or(true, |c| meta.category == c)
            && self.tier.map_or(true, |t| meta.tier == t)
            && self.status.map_or(true, |s| meta.status == s)
            && !(self.exclude_planned && meta.status == ComponentStatus::Planned)
    }
}

impl<'a> ComponentCatalogue<'a> {
    /// Create a catalogue over a registry
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Catalogue over the built-in registry
    pub fn builtin() -> ComponentCatalogue<'static> {
        ComponentCatalogue::new(Registry::builtin())
    }

    /// Documentation entry for a slug
    pub fn get_entry(&self, slug: &str) -> Option<&'a CatalogueEntry> {
        self.registry.entry(slug)
    }

    /// All components, in declaration order
    pub fn list_all(&self) -> &'a [ComponentMeta] {
        self.registry.components()
    }

    /// Components in a category, in declaration order
    pub fn list_by_category(&self, category: ComponentCategory) -> Vec<&'a ComponentMeta> {
        self.filter(&ComponentFilter {
            category: Some(category),
            ..Default::default()
        })
    }

    pub fn list_by_status(&self, status: ComponentStatus) -> Vec<&'a ComponentMeta> {
        self.filter(&ComponentFilter {
            status: Some(status),
            ..Default::default()
        })
    }

    pub fn list_by_tier(&self, tier: Tier) -> Vec<&'a ComponentMeta> {
        self.filter(&ComponentFilter {
            tier: Some(tier),
            ..Default::default()
        })
    }

    /// Components matching every criterion of a filter
    pub fn filter(&self, filter: &ComponentFilter) -> Vec<&'a ComponentMeta> {
        self.list_all().iter().filter(|m| filter.matches(m)).collect()
    }

    /// Components that have a documentation entry
    pub fn list_documented(&self) -> Vec<&'a ComponentMeta> {
        self.list_all()
            .iter()
            .filter(|m| self.get_entry(&m.slug).is_some())
            .collect()
    }

    /// Component record by exact slug
    pub fn get_meta(&self, slug: &str) -> Option<&'a ComponentMeta> {
        self.list_all().iter().find(|m| m.slug == slug)
    }

    /// Component record by slug or case-insensitive name
    pub fn find(&self, identifier: &str) -> Option<&'a ComponentMeta> {
        let identifier = identifier.trim();
        self.get_meta(identifier).or_else(|| {
            self.list_all()
                .iter()
                .find(|m| m.name.eq_ignore_ascii_case(identifier))
        })
    }

    /// The documentation page for a slug; unknown slugs have no page
    pub fn page(&self, slug: &str) -> Option<ComponentPage<'a>> {
        self.get_meta(slug).map(|meta| ComponentPage {
            meta,
            entry: self.get_entry(slug),
        })
    }

    /// Number of components per category, in category order
    pub fn category_counts(&self) -> Vec<(ComponentCategory, usize)> {
        ComponentCategory::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .list_all()
                    .iter()
                    .filter(|m| m.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}
