//! RGBA color type, hex parsing, and the toolbar palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchboard::draw::Color;
/// let red = Color::from_hex("#ff0000").unwrap();
/// assert_eq!(red, sketchboard::draw::color::RED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rrggbb` or `#rgb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::from_rgb8(r, g, b))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let v = ch.to_digit(16)? as u8;
                    *slot = v * 17;
                }
                Some(Self::from_rgb8(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }

    /// Formats the color as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (#ff0000)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (#00aa00)
pub const GREEN: Color = Color::new(0.0, 170.0 / 255.0, 0.0, 1.0);

/// Predefined blue color (#0000ff)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined gold/yellow color (#ffd700)
pub const YELLOW: Color = Color::new(1.0, 215.0 / 255.0, 0.0, 1.0);

/// Predefined orange color (#ffa500)
pub const ORANGE: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);

/// Predefined purple color (#800080)
pub const PURPLE: Color = Color::new(128.0 / 255.0, 0.0, 128.0 / 255.0, 1.0);

/// Predefined pink color (#ffc0cb)
pub const PINK: Color = Color::new(1.0, 192.0 / 255.0, 203.0 / 255.0, 1.0);

/// Predefined white color, the default canvas background
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color, also the default contrast outline
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Quick colors offered as toolbar swatches, in display order.
pub const PALETTE: [Color; 8] = [BLACK, RED, BLUE, GREEN, YELLOW, ORANGE, PURPLE, PINK];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#000000"), Some(BLACK));
        assert_eq!(Color::from_hex("ffffff"), Some(WHITE));
        assert_eq!(Color::from_hex("#f00"), Some(RED));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn hex_formatting_matches_input() {
        let color = Color::from_hex("#1a2b3c").unwrap();
        assert_eq!(color.to_hex(), "#1a2b3c");
        assert_eq!(ORANGE.to_hex(), "#ffa500");
    }

    #[test]
    fn palette_matches_quick_color_hex_codes() {
        let hex: Vec<String> = PALETTE.iter().map(Color::to_hex).collect();
        assert_eq!(
            hex,
            [
                "#000000", "#ff0000", "#0000ff", "#00aa00", "#ffd700", "#ffa500", "#800080",
                "#ffc0cb"
            ]
        );
        for color in PALETTE {
            assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
        }
    }
}
