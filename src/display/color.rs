//! Colour token display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ColorFamily, Shade};
use crate::services::ColorToken;

#[derive(Tabled)]
struct FamilyRow<'a> {
    #[tabled(rename = "Family")]
    name: &'a str,
    #[tabled(rename = "Token")]
    slug: String,
    #[tabled(rename = "500")]
    base: &'a str,
    #[tabled(rename = "Description")]
    description: &'a str,
}

#[derive(Tabled)]
struct ShadeRow<'a> {
    #[tabled(rename = "Shade")]
    shade: u16,
    #[tabled(rename = "Token")]
    token: String,
    #[tabled(rename = "Hex")]
    hex: &'a str,
}

/// Format the colour families as a table
pub fn format_color_families(families: &[ColorFamily]) -> String {
    if families.is_empty() {
        return "No colour families found.".to_string();
    }

    let base = Shade::new(500);
    let rows = families.iter().map(|f| FamilyRow {
        name: &f.name,
        slug: f.slug(),
        base: base.and_then(|s| f.scale.get(s)).unwrap_or("-"),
        description: &f.description,
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format every shade of one family
pub fn format_color_family(family: &ColorFamily) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", family.name));
    output.push_str(&format!("  {}\n", family.description));
    output.push_str(&format!("  {}\n\n", family.inspiration));

    let rows = family.scale.iter().map(|(shade, hex)| ShadeRow {
        shade: shade.step(),
        token: family.token(shade),
        hex,
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    output.push_str(&format!("{}\n", table));
    output
}

/// Format one resolved token
pub fn format_color_token(token: &ColorToken<'_>) -> String {
    format!("{}  {}  ({} {})\n", token.name(), token.hex, token.family.name, token.shade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::services::TokenService;

    #[test]
    fn test_family_table() {
        let output = format_color_families(Registry::builtin().colors());
        assert!(output.contains("blue-ridge"));
        assert!(output.contains("#c41e3a"));
    }

    #[test]
    fn test_family_shades() {
        let service = TokenService::new(Registry::builtin());
        let output = format_color_family(service.find_family("slate").unwrap());
        assert!(output.contains("--slate-950"));
        assert!(output.contains("#020617"));
    }

    #[test]
    fn test_token_line() {
        let service = TokenService::new(Registry::builtin());
        let token = service.shade("dogwood", 500).unwrap();
        assert_eq!(format_color_token(&token), "--dogwood-500  #d4a832  (Dogwood 500)\n");
    }
}
