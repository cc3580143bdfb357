//! Pattern and template listing models
//!
//! Patterns are multi-component compositions; templates are full-page demos.
//! Both are static records shown on their overview pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reusable multi-component composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMeta {
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Whether the pattern page is published (all are "coming soon" today)
    #[serde(default)]
    pub available: bool,
}

impl PatternMeta {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
            available: false,
        }
    }
}

/// Grouping on the templates overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    #[serde(rename = "Government Essentials")]
    GovernmentEssentials,
    #[serde(rename = "Citizen Services")]
    CitizenServices,
}

impl TemplateCategory {
    /// Parse a template category from user input
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match normalized.as_str() {
            "governmentessentials" | "essentials" | "government" => {
                Some(Self::GovernmentEssentials)
            }
            "citizenservices" | "citizen" | "services" => Some(Self::CitizenServices),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GovernmentEssentials => write!(f, "Government Essentials"),
            Self::CitizenServices => write!(f, "Citizen Services"),
        }
    }
}

/// A full-page template demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMeta {
    pub title: String,
    pub description: String,
    pub category: TemplateCategory,
    #[serde(default)]
    pub available: bool,
}

impl TemplateMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: TemplateCategory,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_category_parse() {
        assert_eq!(
            TemplateCategory::parse("Citizen Services"),
            Some(TemplateCategory::CitizenServices)
        );
        assert_eq!(
            TemplateCategory::parse("government-essentials"),
            Some(TemplateCategory::GovernmentEssentials)
        );
        assert_eq!(TemplateCategory::parse("marketing"), None);
    }

    #[test]
    fn test_template_category_serde() {
        let json = serde_json::to_string(&TemplateCategory::CitizenServices).unwrap();
        assert_eq!(json, "\"Citizen Services\"");
    }

    #[test]
    fn test_new_records_are_coming_soon() {
        assert!(!PatternMeta::new("Form Pattern", "form", "Complete form").available);
        assert!(
            !TemplateMeta::new("Status Tracker", "Timeline", TemplateCategory::CitizenServices)
                .available
        );
    }
}
