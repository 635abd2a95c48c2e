use std::fmt;
use std::ops::Index;

use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::color::{hex_to_hsl, hsl_to_hex};

/// Shade labels of a Tailwind-style ramp, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    pub fn value(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Target (saturation, lightness) in percent for this shade, given the
    /// seed's saturation.
    ///
    /// Up to 500, lightness falls from 95 toward 50 while saturation climbs
    /// from half the seed's toward the seed's (never below 10). Past 500,
    /// lightness keeps falling 10 points per 100 and saturation grows up to
    /// 20% over the seed's, capped at 100. 950 extrapolates past 900.
    fn targets(self, seed_saturation: f64) -> (f64, f64) {
        let v = self.value() as f64;
        if v <= 500.0 {
            let factor = v / 500.0;
            let lightness = 95.0 - factor * 45.0;
            let saturation = (seed_saturation * (0.5 + factor * 0.5)).max(10.0);
            (saturation, lightness)
        } else {
            let factor = (v - 500.0) / 400.0;
            let lightness = 50.0 - factor * 40.0;
            let saturation = (seed_saturation * (1.0 + factor * 0.2)).min(100.0);
            (saturation, lightness)
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl Serialize for Shade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One swatch of a generated ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub color: String,
    pub shade: Shade,
}

/// The 11-entry ramp derived from a seed, ordered 50 through 950.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    seed: String,
    entries: [PaletteEntry; 11],
}

impl Palette {
    /// The seed color exactly as it was passed in.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a palette always carries every shade.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, shade: Shade) -> &PaletteEntry {
        // entries are built from Shade::ALL, so the enum order is the index
        &self.entries[shade as usize]
    }
}

impl Index<usize> for Palette {
    type Output = PaletteEntry;

    fn index(&self, index: usize) -> &PaletteEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Derive the 50-950 ramp from a seed hex color.
///
/// Hue is held at the seed's; saturation and lightness follow
/// [`Shade::targets`]. Malformed seeds behave like black.
pub fn generate_color_palette(seed: &str) -> Palette {
    let hsl = hex_to_hsl(seed);
    debug!(seed, h = hsl.h, s = hsl.s, l = hsl.l, "generating palette");

    let entries = Shade::ALL.map(|shade| {
        let (saturation, lightness) = shade.targets(hsl.s as f64);
        PaletteEntry {
            color: hsl_to_hex(hsl.h as f64, saturation, lightness),
            shade,
        }
    });

    Palette {
        seed: seed.to_string(),
        entries,
    }
}

/// A uniformly random seed color as lowercase `#rrggbb`.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: u32 = rng.random_range(0..0xFF_FFFF);
    format!("#{value:06x}")
}
