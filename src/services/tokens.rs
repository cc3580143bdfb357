//! Colour token service

use crate::models::{ColorFamily, Shade};
use crate::registry::Registry;

/// Service for looking up design tokens
pub struct TokenService<'a> {
    registry: &'a Registry,
}

/// A single resolved colour token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken<'a> {
    pub family: &'a ColorFamily,
    pub shade: Shade,
    pub hex: &'a str,
}

impl ColorToken<'_> {
    /// CSS custom property name
    pub fn name(&self) -> String {
        self.family.token(self.shade)
    }
}

impl<'a> TokenService<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    pub fn list(&self) -> &'a [ColorFamily] {
        self.registry.colors()
    }

    /// Family by display name or token slug, ignoring case
    pub fn find_family(&self, name: &str) -> Option<&'a ColorFamily> {
        let name = name.trim();
        self.list()
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name) || f.slug().eq_ignore_ascii_case(name))
    }

    /// A shade of a family; `None` for an unknown family or step
    pub fn shade(&self, family: &str, step: u16) -> Option<ColorToken<'a>> {
        let family = self.find_family(family)?;
        let shade = Shade::new(step)?;
        let hex = family.scale.get(shade)?;
        Some(ColorToken { family, shade, hex })
    }

    /// Every token whose value is the given hex colour
    pub fn find_hex(&self, hex: &str) -> Vec<ColorToken<'a>> {
        let wanted = hex.trim().trim_start_matches('#');

        self.list()
            .iter()
            .flat_map(|family| {
                family
                    .scale
                    .iter()
                    .filter(|(_, value)| value.trim_start_matches('#').eq_ignore_ascii_case(wanted))
                    .map(move |(shade, hex)| ColorToken { family, shade, hex })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService<'static> {
        TokenService::new(Registry::builtin())
    }

    #[test]
    fn test_find_family_by_name_or_slug() {
        let service = service();
        assert_eq!(service.find_family("blue-ridge").map(|f| f.name.as_str()), Some("Blue Ridge"));
        assert_eq!(service.find_family("CARDINAL").map(|f| f.name.as_str()), Some("Cardinal"));
        assert!(service.find_family("mauve").is_none());
    }

    #[test]
    fn test_shade_lookup() {
        let token = service().shade("cardinal", 500).unwrap();
        assert_eq!(token.hex, "#c41e3a");
        assert_eq!(token.name(), "--cardinal-500");

        assert!(service().shade("cardinal", 550).is_none());
    }

    #[test]
    fn test_find_hex_reverse_lookup() {
        let tokens = service().find_hex("1B365D");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name(), "--blue-ridge-900");

        assert!(service().find_hex("#000000").is_empty());
    }
}
