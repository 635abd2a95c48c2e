use super::Color;

/// Integer HSL triple: hue in degrees `[0, 360)`, saturation and lightness in
/// percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h as f64, self.s as f64, self.l as f64)
    }
}

/// Convert a hex color to rounded HSL.
///
/// Achromatic input yields `h = 0, s = 0`. Malformed hex reads as black.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let (r, g, b) = Color::from_hex_or_black(hex).to_srgb().into_components();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (mut h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s)
    };
    if h < 0.0 {
        h += 360.0;
    }

    Hsl {
        h: (h.round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert HSL (degrees, percent, percent) to lowercase `#rrggbb`.
///
/// Saturation and lightness are clamped to [0, 100] and hue wrapped into
/// [0, 360). Any NaN component yields `#000000`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    if h.is_nan() || s.is_nan() || l.is_nan() {
        return Color::BLACK.to_hex();
    }
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::new(channel(r), channel(g), channel(b)).to_hex()
}
