use serde::{Deserialize, Serialize};

use super::{hex_to_hsl, hex_to_oklch};

/// Notation used to render and read a color string.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Hsl,
    Oklch,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Hsl, ColorFormat::Oklch];

    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Oklch => "OKLCH",
        }
    }

    /// The next format in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ColorFormat::Hex => ColorFormat::Hsl,
            ColorFormat::Hsl => ColorFormat::Oklch,
            ColorFormat::Oklch => ColorFormat::Hex,
        }
    }
}

/// `hsl(H, S%, L%)`
pub fn hex_to_hsl_string(hex: &str) -> String {
    let hsl = hex_to_hsl(hex);
    format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
}

/// `oklch(L% C% H)`
pub fn hex_to_oklch_string(hex: &str) -> String {
    let oklch = hex_to_oklch(hex);
    format!("oklch({}% {}% {})", oklch.l, oklch.c, oklch.h)
}

/// Render a hex color in the requested notation. Hex input is returned as-is.
pub fn format_color(hex: &str, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => hex.to_string(),
        ColorFormat::Hsl => hex_to_hsl_string(hex),
        ColorFormat::Oklch => hex_to_oklch_string(hex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_string_layout() {
        assert_eq!(hex_to_hsl_string("#3B82F6"), "hsl(217, 91%, 60%)");
    }

    #[test]
    fn oklch_string_layout() {
        assert_eq!(hex_to_oklch_string("#3b82f6"), "oklch(62% 19% 260)");
    }

    #[test]
    fn hex_format_is_identity() {
        assert_eq!(format_color("#3B82F6", ColorFormat::Hex), "#3B82F6");
        let once = format_color("#abc", ColorFormat::Hex);
        assert_eq!(format_color(&once, ColorFormat::Hex), once);
    }

    #[test]
    fn format_dispatches_by_notation() {
        assert_eq!(format_color("#ff0000", ColorFormat::Hsl), "hsl(0, 100%, 50%)");
        assert_eq!(format_color("#ffffff", ColorFormat::Oklch), "oklch(100% 0% 0)");
    }

    #[test]
    fn next_cycles_through_all() {
        let mut format = ColorFormat::Hex;
        for expected in [ColorFormat::Hsl, ColorFormat::Oklch, ColorFormat::Hex] {
            format = format.next();
            assert_eq!(format, expected);
        }
    }
}
