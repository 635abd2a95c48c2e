use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::pipeline::generate::Palette;

pub const BLACK_HEX: &str = "#000000";
pub const WHITE_HEX: &str = "#ffffff";

/// Which contrast family to measure with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Guideline {
    /// Simplified APCA-style signed score (WCAG 3 draft family)
    #[default]
    Apca,
    /// WCAG 2 luminance ratio
    Wcag2,
}

impl Guideline {
    pub fn label(self) -> &'static str {
        match self {
            Guideline::Apca => "WCAG 3 (APCA)",
            Guideline::Wcag2 => "WCAG 2",
        }
    }

    pub fn measure(self, bg: &str, fg: &str) -> Contrast {
        match self {
            Guideline::Apca => Contrast::Apca {
                score: apca_like_contrast(bg, fg),
            },
            Guideline::Wcag2 => Contrast::Wcag2 {
                ratio: wcag2_contrast_ratio(bg, fg),
            },
        }
    }
}

impl fmt::Display for Guideline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// WCAG relative luminance of a hex color. Malformed hex reads as black.
pub fn relative_luminance(hex: &str) -> f64 {
    Color::from_hex_or_black(hex).relative_luminance()
}

/// WCAG 2 contrast ratio in [1, 21], rounded to one decimal. Symmetric.
pub fn wcag2_contrast_ratio(bg: &str, fg: &str) -> f64 {
    let l_bg = relative_luminance(bg);
    let l_fg = relative_luminance(fg);
    let ratio = (l_bg.max(l_fg) + 0.05) / (l_bg.min(l_fg) + 0.05);
    (ratio * 10.0).round() / 10.0
}

/// Signed luminance-difference score in [-100, 100].
///
/// Positive when the background is lighter than the text, negative when it is
/// darker. This is a simplified stand-in for APCA, not the published
/// algorithm. Two pure blacks score 0.
pub fn apca_like_contrast(bg: &str, fg: &str) -> i32 {
    let l_bg = relative_luminance(bg);
    let l_fg = relative_luminance(fg);
    let brightest = l_bg.max(l_fg);
    if brightest == 0.0 {
        return 0;
    }
    let sign = if l_bg > l_fg { 1.0 } else { -1.0 };
    ((l_bg - l_fg).abs() / brightest * 100.0 * sign).round() as i32
}

/// Black or white, whichever contrasts more with `bg` under `guideline`.
/// Ties go to white.
pub fn best_text_color(bg: &str, guideline: Guideline) -> &'static str {
    let black = guideline.measure(bg, BLACK_HEX).magnitude();
    let white = guideline.measure(bg, WHITE_HEX).magnitude();
    if black > white {
        BLACK_HEX
    } else {
        WHITE_HEX
    }
}

/// A measured contrast. The two families live on unrelated scales, so they
/// are never compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Contrast {
    Wcag2 { ratio: f64 },
    Apca { score: i32 },
}

impl Contrast {
    pub fn guideline(&self) -> Guideline {
        match self {
            Contrast::Wcag2 { .. } => Guideline::Wcag2,
            Contrast::Apca { .. } => Guideline::Apca,
        }
    }

    /// Unsigned strength on this metric's own scale.
    pub fn magnitude(&self) -> f64 {
        match *self {
            Contrast::Wcag2 { ratio } => ratio,
            Contrast::Apca { score } => score.unsigned_abs() as f64,
        }
    }

    pub fn rating(&self) -> Rating {
        match *self {
            Contrast::Apca { score } => match score.unsigned_abs() {
                75.. => Rating::Excellent,
                60..=74 => Rating::Good,
                45..=59 => Rating::Acceptable,
                _ => Rating::Poor,
            },
            Contrast::Wcag2 { ratio } if ratio >= 7.0 => Rating::Aaa,
            Contrast::Wcag2 { ratio } if ratio >= 4.5 => Rating::Aa,
            Contrast::Wcag2 { ratio } if ratio >= 3.0 => Rating::A,
            Contrast::Wcag2 { .. } => Rating::Fail,
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contrast::Wcag2 { ratio } => write!(f, "{ratio:.1}"),
            Contrast::Apca { score } => write!(f, "{score}"),
        }
    }
}

/// Qualitative band for a contrast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    Poor,
    Acceptable,
    Good,
    Excellent,
    Fail,
    A,
    Aa,
    Aaa,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::Poor => "Poor",
            Rating::Acceptable => "Acceptable",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
            Rating::Fail => "Fail",
            Rating::A => "A",
            Rating::Aa => "AA",
            Rating::Aaa => "AAA",
        }
    }

    /// Whether text at this rating is considered readable.
    pub fn passes(self) -> bool {
        !matches!(self, Rating::Poor | Rating::Fail)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum contrast a grid cell needs to be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ContrastFilter {
    All,
    Min15,
    Min30,
    #[default]
    Min45,
    Min60,
    Min75,
}

impl ContrastFilter {
    pub const ALL: [ContrastFilter; 6] = [
        ContrastFilter::Min15,
        ContrastFilter::Min30,
        ContrastFilter::Min45,
        ContrastFilter::Min60,
        ContrastFilter::Min75,
        ContrastFilter::All,
    ];

    pub fn threshold(self) -> Option<f64> {
        match self {
            ContrastFilter::All => None,
            ContrastFilter::Min15 => Some(15.0),
            ContrastFilter::Min30 => Some(30.0),
            ContrastFilter::Min45 => Some(45.0),
            ContrastFilter::Min60 => Some(60.0),
            ContrastFilter::Min75 => Some(75.0),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ContrastFilter::Min15 => "Minimum for large text",
            ContrastFilter::Min30 => "Minimum for normal text",
            ContrastFilter::Min45 => "Minimum for headings and titles",
            ContrastFilter::Min60 => "Good contrast",
            ContrastFilter::Min75 => "Excellent contrast",
            ContrastFilter::All => "Show all combinations",
        }
    }

    /// APCA compares the absolute score, WCAG 2 the ratio itself.
    pub fn shows(self, contrast: &Contrast) -> bool {
        match self.threshold() {
            None => true,
            Some(min) => contrast.magnitude() >= min,
        }
    }

    /// The next threshold in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ContrastFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.threshold() {
            None => f.write_str("All"),
            Some(min) => write!(f, "{min}+"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown contrast filter '{0}': expected one of All, 15, 30, 45, 60, 75")]
pub struct UnknownFilter(pub String);

impl FromStr for ContrastFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(ContrastFilter::All);
        }
        match trimmed.trim_end_matches('+') {
            "15" => Ok(ContrastFilter::Min15),
            "30" => Ok(ContrastFilter::Min30),
            "45" => Ok(ContrastFilter::Min45),
            "60" => Ok(ContrastFilter::Min60),
            "75" => Ok(ContrastFilter::Min75),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

impl TryFrom<String> for ContrastFilter {
    type Error = UnknownFilter;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContrastFilter> for String {
    fn from(filter: ContrastFilter) -> Self {
        filter.to_string()
    }
}

/// A labelled color on one axis of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColor {
    pub label: String,
    pub hex: String,
}

/// Every (background, text) pairing of white, the palette and black.
#[derive(Debug, Clone)]
pub struct ContrastGrid {
    guideline: Guideline,
    colors: Vec<GridColor>,
    /// `cells[bg][fg]`
    cells: Vec<Vec<Contrast>>,
}

impl ContrastGrid {
    pub fn new(palette: &Palette, guideline: Guideline) -> Self {
        let mut colors = Vec::with_capacity(palette.len() + 2);
        colors.push(GridColor {
            label: "White".to_string(),
            hex: WHITE_HEX.to_string(),
        });
        colors.extend(palette.iter().map(|entry| GridColor {
            label: entry.shade.to_string(),
            hex: entry.color.clone(),
        }));
        colors.push(GridColor {
            label: "Black".to_string(),
            hex: BLACK_HEX.to_string(),
        });

        let cells = colors
            .iter()
            .map(|bg| {
                colors
                    .iter()
                    .map(|fg| guideline.measure(&bg.hex, &fg.hex))
                    .collect()
            })
            .collect();

        Self {
            guideline,
            colors,
            cells,
        }
    }

    pub fn guideline(&self) -> Guideline {
        self.guideline
    }

    pub fn colors(&self) -> &[GridColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn cell(&self, bg: usize, fg: usize) -> Option<Contrast> {
        self.cells.get(bg)?.get(fg).copied()
    }

    /// Cells passing `filter`, as `(bg, fg, contrast)` index triples.
    pub fn visible(
        &self,
        filter: ContrastFilter,
    ) -> impl Iterator<Item = (usize, usize, Contrast)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(bg, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, c)| filter.shows(c))
                .map(move |(fg, c)| (bg, fg, *c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::generate::generate_color_palette;

    #[test]
    fn wcag_black_white_is_21() {
        assert_eq!(wcag2_contrast_ratio(WHITE_HEX, BLACK_HEX), 21.0);
        assert_eq!(wcag2_contrast_ratio(BLACK_HEX, WHITE_HEX), 21.0);
    }

    #[test]
    fn wcag_same_color_is_1() {
        assert_eq!(wcag2_contrast_ratio("#3b82f6", "#3b82f6"), 1.0);
    }

    #[test]
    fn wcag_rounds_to_one_decimal() {
        assert_eq!(wcag2_contrast_ratio("#3b82f6", WHITE_HEX), 3.7);
        assert_eq!(wcag2_contrast_ratio("#777777", WHITE_HEX), 4.5);
    }

    #[test]
    fn apca_identical_is_zero() {
        assert_eq!(apca_like_contrast(WHITE_HEX, WHITE_HEX), 0);
        assert_eq!(apca_like_contrast(BLACK_HEX, BLACK_HEX), 0);
    }

    #[test]
    fn apca_sign_tracks_polarity() {
        assert_eq!(apca_like_contrast(WHITE_HEX, BLACK_HEX), 100);
        assert_eq!(apca_like_contrast(BLACK_HEX, WHITE_HEX), -100);
        assert_eq!(apca_like_contrast("#3b82f6", WHITE_HEX), -76);
        assert_eq!(apca_like_contrast(WHITE_HEX, "#777777"), 82);
    }

    #[test]
    fn malformed_hex_measures_as_black() {
        assert_eq!(relative_luminance("nope"), 0.0);
        assert_eq!(wcag2_contrast_ratio("nope", WHITE_HEX), 21.0);
    }

    #[test]
    fn best_text_on_yellow_is_black() {
        assert_eq!(best_text_color("#FFFF00", Guideline::Wcag2), BLACK_HEX);
        assert_eq!(best_text_color("#FFFF00", Guideline::Apca), BLACK_HEX);
    }

    #[test]
    fn best_text_on_dark_is_white() {
        assert_eq!(best_text_color("#001433", Guideline::Wcag2), WHITE_HEX);
        assert_eq!(best_text_color(BLACK_HEX, Guideline::Apca), WHITE_HEX);
    }

    #[test]
    fn apca_rating_bands_use_absolute_score() {
        let rate = |score| Contrast::Apca { score }.rating();
        assert_eq!(rate(44), Rating::Poor);
        assert_eq!(rate(45), Rating::Acceptable);
        assert_eq!(rate(-59), Rating::Acceptable);
        assert_eq!(rate(60), Rating::Good);
        assert_eq!(rate(-74), Rating::Good);
        assert_eq!(rate(75), Rating::Excellent);
        assert_eq!(rate(-100), Rating::Excellent);
    }

    #[test]
    fn wcag_rating_bands() {
        let rate = |ratio| Contrast::Wcag2 { ratio }.rating();
        assert_eq!(rate(2.9), Rating::Fail);
        assert_eq!(rate(3.0), Rating::A);
        assert_eq!(rate(4.4), Rating::A);
        assert_eq!(rate(4.5), Rating::Aa);
        assert_eq!(rate(6.9), Rating::Aa);
        assert_eq!(rate(7.0), Rating::Aaa);
        assert_eq!(rate(21.0), Rating::Aaa);
    }

    #[test]
    fn contrast_display() {
        assert_eq!(Contrast::Wcag2 { ratio: 4.0 }.to_string(), "4.0");
        assert_eq!(Contrast::Apca { score: -76 }.to_string(), "-76");
    }

    #[test]
    fn contrast_serializes_tagged() {
        let json = serde_json::to_string(&Contrast::Apca { score: 82 }).unwrap();
        assert_eq!(json, r#"{"kind":"apca","score":82}"#);
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("45+".parse::<ContrastFilter>(), Ok(ContrastFilter::Min45));
        assert_eq!("75".parse::<ContrastFilter>(), Ok(ContrastFilter::Min75));
        assert_eq!("ALL".parse::<ContrastFilter>(), Ok(ContrastFilter::All));
        assert!("50".parse::<ContrastFilter>().is_err());
        assert_eq!(ContrastFilter::Min30.to_string(), "30+");
    }

    #[test]
    fn filter_compares_magnitude() {
        let filter = ContrastFilter::Min45;
        assert!(filter.shows(&Contrast::Apca { score: -45 }));
        assert!(!filter.shows(&Contrast::Apca { score: 44 }));
        assert!(ContrastFilter::Min15.shows(&Contrast::Wcag2 { ratio: 21.0 }));
        assert!(!ContrastFilter::Min15.shows(&Contrast::Wcag2 { ratio: 14.9 }));
        assert!(ContrastFilter::All.shows(&Contrast::Apca { score: 0 }));
    }

    #[test]
    fn filter_next_wraps() {
        assert_eq!(ContrastFilter::Min75.next(), ContrastFilter::All);
        assert_eq!(ContrastFilter::All.next(), ContrastFilter::Min15);
    }

    #[test]
    fn grid_is_bracketed_by_white_and_black() {
        let palette = generate_color_palette("#3b82f6");
        let grid = ContrastGrid::new(&palette, Guideline::Wcag2);
        assert_eq!(grid.len(), 13);
        assert_eq!(grid.colors()[0].label, "White");
        assert_eq!(grid.colors()[1].label, "50");
        assert_eq!(grid.colors()[12].hex, BLACK_HEX);
        assert_eq!(grid.cell(0, 12), Some(Contrast::Wcag2 { ratio: 21.0 }));
        assert_eq!(grid.cell(13, 0), None);
    }

    #[test]
    fn grid_diagonal_is_minimal() {
        let palette = generate_color_palette("#3b82f6");
        let apca = ContrastGrid::new(&palette, Guideline::Apca);
        let wcag = ContrastGrid::new(&palette, Guideline::Wcag2);
        for i in 0..apca.len() {
            assert_eq!(apca.cell(i, i), Some(Contrast::Apca { score: 0 }));
            assert_eq!(wcag.cell(i, i), Some(Contrast::Wcag2 { ratio: 1.0 }));
        }
    }

    #[test]
    fn grid_visible_respects_filter() {
        let palette = generate_color_palette("#3b82f6");
        let grid = ContrastGrid::new(&palette, Guideline::Apca);
        let all = grid.visible(ContrastFilter::All).count();
        assert_eq!(all, 13 * 13);
        let strong: Vec<_> = grid.visible(ContrastFilter::Min75).collect();
        assert!(strong.len() < all);
        assert!(strong.iter().all(|(_, _, c)| c.magnitude() >= 75.0));
    }
}
