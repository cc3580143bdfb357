//! Built-in template listing

use crate::models::{TemplateCategory, TemplateMeta};

/// The templates overview, in display order
pub fn builtin_templates() -> Vec<TemplateMeta> {
    use TemplateCategory::*;

    let rows = [
        (
            "Agency Homepage",
            "Hero, services grid, news feed, quick links, contact CTA.",
            GovernmentEssentials,
        ),
        (
            "Services & Permits",
            "Category sidebar, service cards, search and filter.",
            GovernmentEssentials,
        ),
        (
            "Contact / Office Finder",
            "Location search, office cards, map placeholder, hours.",
            GovernmentEssentials,
        ),
        (
            "News & Announcements",
            "Featured story, card grid, category filter, pagination.",
            GovernmentEssentials,
        ),
        (
            "DMV Service Portal",
            "Service menu, appointment scheduling, document checklist.",
            CitizenServices,
        ),
        (
            "Benefit Application",
            "Multi-step wizard, form validation, review and submit.",
            CitizenServices,
        ),
        (
            "Status Tracker",
            "Status timeline, reference lookup, detail cards.",
            CitizenServices,
        ),
    ];

    rows.into_iter()
        .map(|(title, description, category)| TemplateMeta::new(title, description, category))
        .collect()
}
