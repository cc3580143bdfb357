//! Pattern listing service

use crate::models::PatternMeta;
use crate::registry::Registry;

/// Service for the patterns overview
pub struct PatternService<'a> {
    registry: &'a Registry,
}

impl<'a> PatternService<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// All patterns, in display order
    pub fn list(&self) -> &'a [PatternMeta] {
        self.registry.patterns()
    }

    /// Pattern by slug
    pub fn get(&self, slug: &str) -> Option<&'a PatternMeta> {
        self.list().iter().find(|p| p.slug == slug)
    }

    /// Patterns whose pages are published
    pub fn available(&self) -> Vec<&'a PatternMeta> {
        self.list().iter().filter(|p| p.available).collect()
    }
}
