//! Template listing service
//!
//! Templates are grouped by category on the overview page. Groups appear in
//! the order their category is first seen in the listing.

use crate::models::{TemplateCategory, TemplateMeta};
use crate::registry::Registry;

/// Service for the templates overview
pub struct TemplateService<'a> {
    registry: &'a Registry,
}

/// Templates sharing a category
#[derive(Debug, Clone)]
pub struct TemplateGroup<'a> {
    pub category: TemplateCategory,
    pub templates: Vec<&'a TemplateMeta>,
}

impl<'a> TemplateService<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    pub fn list(&self) -> &'a [TemplateMeta] {
        self.registry.templates()
    }

    /// Templates in a category, in listing order
    pub fn list_by_category(&self, category: TemplateCategory) -> Vec<&'a TemplateMeta> {
        self.list()
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Templates grouped by category
    pub fn grouped(&self) -> Vec<TemplateGroup<'a>> {
        let mut groups: Vec<TemplateGroup<'a>> = Vec::new();

        for template in self.list() {
            match groups.iter_mut().find(|g| g.category == template.category) {
                Some(group) => group.templates.push(template),
                None => groups.push(TemplateGroup {
                    category: template.category,
                    templates: vec![template],
                }),
            }
        }

        groups
    }
}
