//! Colour token model
//!
//! Each colour family has an eleven-step scale from 50 (lightest) to 950
//! (darkest). Tokens are named `<family-slug>-<step>`, e.g. `dogwood-500`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A step on the 50..950 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Shade(u16);

impl Shade {
    /// All valid steps, lightest first
    pub const STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

    /// Create a shade if `step` is on the scale
    pub fn new(step: u16) -> Option<Self> {
        Self::STEPS.contains(&step).then_some(Self(step))
    }

    pub fn step(&self) -> u16 {
        self.0
    }

    /// Position of this shade on the scale (0 = 50)
    pub fn index(&self) -> usize {
        Self::STEPS.iter().position(|s| *s == self.0).unwrap_or(0)
    }
}

impl TryFrom<u16> for Shade {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Shade::new(value).ok_or_else(|| format!("{} is not a shade step", value))
    }
}

impl From<Shade> for u16 {
    fn from(shade: Shade) -> Self {
        shade.0
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eleven hex values of a family, lightest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(Vec<String>);

impl ColorScale {
    /// Build a scale from exactly eleven hex values
    pub fn from_hex(values: [&str; 11]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }

    /// Hex value at a shade
    pub fn get(&self, shade: Shade) -> Option<&str> {
        self.0.get(shade.index()).map(String::as_str)
    }

    /// Iterate `(shade, hex)` pairs, lightest first
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> {
        Shade::STEPS
            .iter()
            .zip(self.0.iter())
            .map(|(step, hex)| (Shade(*step), hex.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A named colour family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFamily {
    pub name: String,
    pub description: String,
    pub inspiration: String,
    pub scale: ColorScale,
}

impl ColorFamily {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        inspiration: impl Into<String>,
        scale: ColorScale,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            inspiration: inspiration.into(),
            scale,
        }
    }

    /// Token prefix, e.g. "blue-ridge"
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// CSS custom property name for a shade, e.g. `--blue-ridge-900`
    pub fn token(&self, shade: Shade) -> String {
        format!("--{}-{}", self.slug(), shade)
    }
}
