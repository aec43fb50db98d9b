//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named/hex color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, fallback.to_hex());
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true if the value names a color that can be resolved.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn resolves_names_hex_and_rgb() {
        assert_eq!(ColorSpec::from("red").to_color_or(BLACK), RED);
        assert_eq!(ColorSpec::from("#ff0000").to_color_or(BLACK), RED);
        assert_eq!(ColorSpec::Rgb([255, 0, 0]).to_color_or(BLACK), RED);
    }

    #[test]
    fn unknown_name_uses_fallback() {
        let spec = ColorSpec::from("mauve-ish");
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color_or(BLACK), BLACK);
    }
}
