pub mod format;
pub mod hsl;
pub mod oklch;
pub mod parse;

use palette::Srgb;

pub use format::{format_color, hex_to_hsl_string, hex_to_oklch_string, ColorFormat};
pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use oklch::{hex_to_oklch, oklch_to_hex, Oklch};
pub use parse::{
    is_valid_hex_color, is_valid_incomplete_hsl, is_valid_incomplete_oklch, parse_color_string,
};

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components; every other representation is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    ///
    /// Returns `None` for anything else. Shorthand digits are doubled, so
    /// `#f80` reads as `#ff8800`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 17);
                Some(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::new(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// Like [`Color::from_hex`], but malformed input silently reads as black.
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::BLACK)
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to [0, 1].
    pub fn to_srgb(self) -> Srgb<f64> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Clamp an `Srgb<f64>` to [0, 1] and round each channel to u8.
    pub fn from_srgb_clamped(srgb: Srgb<f64>) -> Self {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(srgb.red),
            g: channel(srgb.green),
            b: channel(srgb.blue),
        }
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel (knee at 0.03928), then takes the
    /// weighted sum.
    pub fn relative_luminance(self) -> f64 {
        fn linearize(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let original = Color::from_hex("#ff8800").unwrap();
        assert_eq!(original, Color::new(255, 136, 0));
        assert_eq!(original.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_uppercase_input() {
        let color = Color::from_hex("#3B82F6").unwrap();
        assert_eq!(color.to_hex(), "#3b82f6");
    }

    #[test]
    fn hex_without_hash() {
        let color = Color::from_hex("aabbcc").unwrap();
        assert_eq!(color.to_hex(), "#aabbcc");
    }

    #[test]
    fn hex_shorthand_doubles_digits() {
        let color = Color::from_hex("#f80").unwrap();
        assert_eq!(color.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_invalid_length() {
        assert!(Color::from_hex("#ffff").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn hex_invalid_chars() {
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("#+1+1+1").is_none());
    }

    #[test]
    fn malformed_hex_falls_back_to_black() {
        assert_eq!(Color::from_hex_or_black("not a color"), Color::BLACK);
        assert_eq!(Color::from_hex_or_black("#12345"), Color::BLACK);
    }

    #[test]
    fn srgb_clamps_out_of_range_channels() {
        let color = Color::from_srgb_clamped(Srgb::new(1.4, -0.2, 0.5));
        assert_eq!(color, Color::new(255, 0, 128));
    }

    #[test]
    fn relative_luminance_black() {
        assert!(Color::BLACK.relative_luminance() < 0.001);
    }

    #[test]
    fn relative_luminance_white() {
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }

    #[test]
    fn relative_luminance_green_dominates() {
        let red = Color::new(255, 0, 0).relative_luminance();
        let green = Color::new(0, 255, 0).relative_luminance();
        let blue = Color::new(0, 0, 255).relative_luminance();
        assert!(green > red && red > blue);
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }
}
