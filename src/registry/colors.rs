//! Built-in colour token families
//!
//! Scales run 50 through 950. Family order matches the foundations page.

use crate::models::{ColorFamily, ColorScale};

pub fn builtin_colors() -> Vec<ColorFamily> {
    vec![
        ColorFamily::new(
            "Blue Ridge",
            "Deep navy, primary brand color",
            "Inspired by the Blue Ridge Mountains",
            ColorScale::from_hex([
                "#f0f4f8", "#d9e2ec", "#bcccdc", "#9fb3c8", "#829ab1", "#627d98", "#486581",
                "#334e68", "#243b53", "#1b365d", "#102a43",
            ]),
        ),
        ColorFamily::new(
            "Chesapeake",
            "Teal, informational and interactive",
            "Inspired by the Chesapeake Bay",
            ColorScale::from_hex([
                "#effcf6", "#c6f7e2", "#8eedc7", "#65d6ad", "#3ebd93", "#27ab83", "#0e7c7b",
                "#0c6b6a", "#0a5a59", "#084948", "#053837",
            ]),
        ),
        ColorFamily::new(
            "Dogwood",
            "Gold, accent and attention",
            "Named after the Virginia state flower",
            ColorScale::from_hex([
                "#fefdf4", "#fdf9e3", "#faf0c0", "#f5e08e", "#eecb55", "#d4a832", "#b8892a",
                "#996c22", "#7a5520", "#66461f", "#3b270e",
            ]),
        ),
        ColorFamily::new(
            "Piedmont",
            "Warm brown, earthy neutral",
            "Inspired by Piedmont clay and earth",
            ColorScale::from_hex([
                "#fdf8f3", "#faeadb", "#f3d5b5", "#e6b98a", "#d49a6a", "#8b4513", "#7a3c11",
                "#6a340f", "#592b0d", "#49230b", "#381b08",
            ]),
        ),
        ColorFamily::new(
            "Shenandoah",
            "Forest green, success states",
            "Inspired by the Shenandoah Valley",
            ColorScale::from_hex([
                "#f0faf4", "#d4edda", "#a8d8b9", "#7bc49a", "#5cb57e", "#4a7c59", "#3d6b4a",
                "#305a3c", "#24492f", "#1a3823", "#112718",
            ]),
        ),
        ColorFamily::new(
            "Cardinal",
            "Vibrant red, error and emphasis",
            "Named after the Virginia state bird",
            ColorScale::from_hex([
                "#fef2f4", "#fde3e8", "#fbc8d3", "#f89daf", "#f26b84", "#c41e3a", "#b01a34",
                "#93162c", "#7a1325", "#68111f", "#3b0912",
            ]),
        ),
        ColorFamily::new(
            "Slate",
            "Neutral blue-gray",
            "Clean neutral for backgrounds and text",
            ColorScale::from_hex([
                "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569",
                "#334155", "#1e293b", "#0f172a", "#020617",
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shade;

    #[test]
    fn test_seven_full_families() {
        let colors = builtin_colors();
        assert_eq!(colors.len(), 7);
        assert!(colors.iter().all(|c| c.scale.len() == Shade::STEPS.len()));
    }

    #[test]
    fn test_brand_navy() {
        let colors = builtin_colors();
        let shade = Shade::new(900).unwrap();
        assert_eq!(colors[0].scale.get(shade), Some("#1b365d"));
    }
}
