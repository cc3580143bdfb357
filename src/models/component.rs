//! Component metadata model
//!
//! A `ComponentMeta` is one row of the component index: the name, slug and
//! classification shown on the components overview. The slug is the lookup
//! key used by documentation pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a component is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentCategory {
    Form,
    Feedback,
    Layout,
    Navigation,
    #[serde(rename = "Data Display")]
    DataDisplay,
}

impl ComponentCategory {
    /// All categories in overview order
    pub const ALL: [ComponentCategory; 5] = [
        Self::Form,
        Self::Feedback,
        Self::Layout,
        Self::Navigation,
        Self::DataDisplay,
    ];

    /// Parse a category from user input
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match normalized.as_str() {
            "form" | "forms" => Some(Self::Form),
            "feedback" => Some(Self::Feedback),
            "layout" => Some(Self::Layout),
            "navigation" | "nav" => Some(Self::Navigation),
            "datadisplay" | "data" => Some(Self::DataDisplay),
            _ => None,
        }
    }

    /// The category after this one, wrapping around (used by the TUI filter)
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form => write!(f, "Form"),
            Self::Feedback => write!(f, "Feedback"),
            Self::Layout => write!(f, "Layout"),
            Self::Navigation => write!(f, "Navigation"),
            Self::DataDisplay => write!(f, "Data Display"),
        }
    }
}

/// Rollout tier (1 = core set, 3 = long tail)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    /// Numeric value of the tier
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(format!("tier must be 1, 2 or 3 (got {})", other)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.number()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.number())
    }
}

/// Release status of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Stable,
    Beta,
    Planned,
}

impl ComponentStatus {
    /// Parse a status from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stable" => Some(Self::Stable),
            "beta" => Some(Self::Beta),
            "planned" | "coming-soon" => Some(Self::Planned),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Beta => write!(f, "beta"),
            Self::Planned => write!(f, "planned"),
        }
    }
}

/// One record of the component index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Display name (e.g. "TextArea")
    pub name: String,

    /// Unique lookup key (e.g. "textarea")
    pub slug: String,

    /// One-line summary
    pub description: String,

    pub category: ComponentCategory,

    pub tier: Tier,

    pub status: ComponentStatus,
}

impl ComponentMeta {
    /// Create a new component record
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        category: ComponentCategory,
        tier: Tier,
        status: ComponentStatus,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
            category,
            tier,
            status,
        }
    }

    /// Route of the documentation page for this component
    pub fn route(&self) -> String {
        format!("/components/{}", self.slug)
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ComponentValidationError> {
        if self.name.trim().is_empty() {
            return Err(ComponentValidationError::EmptyName);
        }

        if self.slug.is_empty() {
            return Err(ComponentValidationError::EmptySlug);
        }

        let slug_ok = self
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !slug_ok {
            return Err(ComponentValidationError::InvalidSlug(self.slug.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for ComponentMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for component records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentValidationError {
    EmptyName,
    EmptySlug,
    InvalidSlug(String),
}

impl fmt::Display for ComponentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Component name cannot be empty"),
            Self::EmptySlug => write!(f, "Component slug cannot be empty"),
            Self::InvalidSlug(slug) => write!(
                f,
                "Component slug '{}' may only contain lowercase letters, digits and '-'",
                slug
            ),
        }
    }
}

impl std::error::Error for ComponentValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> ComponentMeta {
        ComponentMeta::new(
            "Button",
            "button",
            "Triggers actions",
            ComponentCategory::Form,
            Tier::One,
            ComponentStatus::Stable,
        )
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ComponentCategory::parse("form"), Some(ComponentCategory::Form));
        assert_eq!(
            ComponentCategory::parse("Data Display"),
            Some(ComponentCategory::DataDisplay)
        );
        assert_eq!(
            ComponentCategory::parse("data-display"),
            Some(ComponentCategory::DataDisplay)
        );
        assert_eq!(ComponentCategory::parse("widgets"), None);
    }

    #[test]
    fn test_category_serde_uses_display_names() {
        let json = serde_json::to_string(&ComponentCategory::DataDisplay).unwrap();
        assert_eq!(json, "\"Data Display\"");
    }

    #[test]
    fn test_category_next_wraps() {
        assert_eq!(ComponentCategory::Form.next(), ComponentCategory::Feedback);
        assert_eq!(ComponentCategory::DataDisplay.next(), ComponentCategory::Form);
    }

    #[test]
    fn test_tier_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Tier::Two).unwrap(), "2");
        let tier: Tier = serde_json::from_str("3").unwrap();
        assert_eq!(tier, Tier::Three);
        assert!(serde_json::from_str::<Tier>("4").is_err());
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!(ComponentStatus::parse("BETA"), Some(ComponentStatus::Beta));
        assert_eq!(ComponentStatus::Planned.to_string(), "planned");
    }

    #[test]
    fn test_validate() {
        assert!(button().validate().is_ok());

        let mut bad = button();
        bad.slug = "Text Area".into();
        assert_eq!(
            bad.validate(),
            Err(ComponentValidationError::InvalidSlug("Text Area".into()))
        );

        bad.name = " ".into();
        assert_eq!(bad.validate(), Err(ComponentValidationError::EmptyName));
    }

    #[test]
    fn test_route() {
        assert_eq!(button().route(), "/components/button");
    }
}
