//! Approximate OKLCH encoding.
//!
//! Lightness and chroma are carried as integer percentages and hue as integer
//! degrees. Chroma is the OKLab chroma scaled by 100, so real-world colors land
//! roughly in `0..=37` rather than `0.0..=0.37`. The quantization makes the
//! round trip lossy for highly saturated colors; palette shades are tuned to
//! this scale, so it stays as is.

use palette::{FromColor, IntoColor, Srgb};

use super::Color;

/// Integer OKLCH triple: `l` and `c` in percent, `h` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Oklch {
    pub l: u8,
    pub c: u8,
    pub h: u16,
}

impl Oklch {
    pub const fn new(l: u8, c: u8, h: u16) -> Self {
        Self { l, c, h }
    }

    pub fn to_hex(self) -> String {
        oklch_to_hex(self.l as f64, self.c as f64, self.h as f64)
    }
}

/// Convert a hex color to the approximate OKLCH encoding.
///
/// Malformed hex reads as black. Colors whose chroma rounds to zero report
/// hue 0.
pub fn hex_to_oklch(hex: &str) -> Oklch {
    let lch: palette::Oklch<f64> = Color::from_hex_or_black(hex).to_srgb().into_color();

    let chroma = (lch.chroma * 100.0).round();
    let hue = if chroma == 0.0 {
        0
    } else {
        (lch.hue.into_positive_degrees().round() as u16) % 360
    };

    Oklch {
        l: (lch.l * 100.0).round().clamp(0.0, 100.0) as u8,
        c: chroma.clamp(0.0, 100.0) as u8,
        h: hue,
    }
}

/// Convert the approximate OKLCH encoding (percent, percent, degrees) back to
/// lowercase `#rrggbb`.
///
/// Out-of-gamut results are clamped channel-wise. Any NaN component yields
/// `#000000`.
pub fn oklch_to_hex(l: f64, c: f64, h: f64) -> String {
    if l.is_nan() || c.is_nan() || h.is_nan() {
        return Color::BLACK.to_hex();
    }
    let srgb: Srgb<f64> = Srgb::from_color(palette::Oklch::new(l / 100.0, c / 100.0, h));
    Color::from_srgb_clamped(srgb).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black() {
        assert_eq!(hex_to_oklch("#ffffff"), Oklch::new(100, 0, 0));
        assert_eq!(hex_to_oklch("#000000"), Oklch::new(0, 0, 0));
    }

    #[test]
    fn gray_is_achromatic() {
        let oklch = hex_to_oklch("#808080");
        assert_eq!(oklch.c, 0);
        assert_eq!(oklch.h, 0);
        assert_eq!(oklch.l, 60);
    }

    #[test]
    fn tailwind_blue_vector() {
        assert_eq!(hex_to_oklch("#3b82f6"), Oklch::new(62, 19, 260));
    }

    #[test]
    fn red_vector() {
        assert_eq!(hex_to_oklch("#ff0000"), Oklch::new(63, 26, 29));
    }

    #[test]
    fn round_trip_mid_tones() {
        assert_eq!(hex_to_oklch("#808080").to_hex(), "#808080");
        assert_eq!(hex_to_oklch("#ffffff").to_hex(), "#ffffff");
        assert_eq!(hex_to_oklch("#3b82f6").to_hex(), "#3a81f6");
    }

    #[test]
    fn out_of_gamut_is_clamped() {
        let hex = oklch_to_hex(70.0, 15.0, 200.0);
        assert_eq!(hex, "#00b9c3");
        assert!(Color::from_hex(&oklch_to_hex(90.0, 100.0, 140.0)).is_some());
    }

    #[test]
    fn nan_is_black() {
        assert_eq!(oklch_to_hex(f64::NAN, 10.0, 10.0), "#000000");
        assert_eq!(oklch_to_hex(50.0, f64::NAN, 10.0), "#000000");
        assert_eq!(oklch_to_hex(50.0, 10.0, f64::NAN), "#000000");
    }

    #[test]
    fn matches_palette_oklch_before_rounding() {
        for hex in ["#3b82f6", "#ff0000", "#22c55e", "#a855f7", "#0b64f4"] {
            let lch: palette::Oklch<f64> = Color::from_hex(hex).unwrap().to_srgb().into_color();
            let oklch = hex_to_oklch(hex);
            assert_eq!(oklch.l as f64, (lch.l * 100.0).round(), "{hex}");
            assert_eq!(oklch.c as f64, (lch.chroma * 100.0).round(), "{hex}");
            assert!(oklch.h.abs_diff(lch.hue.into_positive_degrees().round() as u16) <= 1);
        }
    }

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(oklch_to_hex(62.0, 19.0, 620.0), oklch_to_hex(62.0, 19.0, 260.0));
        assert_eq!(oklch_to_hex(62.0, 19.0, -100.0), oklch_to_hex(62.0, 19.0, 260.0));
    }

    #[test]
    fn malformed_hex_reads_as_black() {
        assert_eq!(hex_to_oklch("oops"), Oklch::new(0, 0, 0));
    }
}
