//! Built-in pattern listing

use crate::models::PatternMeta;

/// The patterns overview, in display order
pub fn builtin_patterns() -> Vec<PatternMeta> {
    vec![
        PatternMeta::new(
            "Form Pattern",
            "form",
            "Complete form with validation, error summary, and success states.",
        ),
        PatternMeta::new(
            "Search Results",
            "search-results",
            "Search bar, filters, result cards, and pagination.",
        ),
        PatternMeta::new(
            "Authentication",
            "authentication",
            "Sign-in, forgot password, and create account flows.",
        ),
        PatternMeta::new(
            "Status Tracker",
            "status-tracker",
            "Step indicator, status cards, and timeline.",
        ),
        PatternMeta::new(
            "Data Dashboard",
            "data-dashboard",
            "Stat cards, data table, and filter controls.",
        ),
        PatternMeta::new(
            "Contact Information",
            "contact-info",
            "Address card, map placeholder, and office hours.",
        ),
        PatternMeta::new(
            "News Feed",
            "news-feed",
            "Card grid with filters and featured article hero.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_are_coming_soon() {
        let patterns = builtin_patterns();
        assert_eq!(patterns.len(), 7);
        assert!(patterns.iter().all(|p| !p.available));
    }
}
