//! Plain-text renderings of a palette for stdout.

use crossterm::style::{Color as TermColor, Stylize};

use crate::color::{format_color, Color, ColorFormat};
use crate::pipeline::contrast::{best_text_color, ContrastFilter, ContrastGrid, Guideline};
use crate::pipeline::generate::Palette;

const CELL_WIDTH: usize = 7;

fn term_color(hex: &str) -> TermColor {
    let c = Color::from_hex_or_black(hex);
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// One `<shade> <color>` line per swatch.
pub fn ramp_lines(palette: &Palette, format: ColorFormat) -> Vec<String> {
    palette
        .iter()
        .map(|entry| format!("{:>4}  {}", entry.shade, format_color(&entry.color, format)))
        .collect()
}

/// A single line of truecolor swatches, each labelled with its shade in
/// whichever of black or white reads better.
pub fn preview_line(palette: &Palette, guideline: Guideline) -> String {
    let mut out = String::new();
    for entry in palette {
        let label = format!("{:^6}", entry.shade.to_string());
        let fg = best_text_color(&entry.color, guideline);
        out.push_str(
            &label
                .with(term_color(fg))
                .on(term_color(&entry.color))
                .to_string(),
        );
    }
    out
}

/// The contrast grid as a table: rows are backgrounds, columns are text
/// colors. Cells hidden by `filter` print as `-`.
pub fn grid_table(grid: &ContrastGrid, filter: ContrastFilter) -> String {
    let mut out = format!(
        "{} contrast, showing {} ({})\n",
        grid.guideline(),
        filter,
        filter.description()
    );

    out.push_str(&format!("{:>w$}", "bg \\ fg", w = CELL_WIDTH + 1));
    for color in grid.colors() {
        out.push_str(&format!("{:>w$}", color.label, w = CELL_WIDTH));
    }
    out.push('\n');

    for (bg, row_color) in grid.colors().iter().enumerate() {
        out.push_str(&format!("{:>w$}", row_color.label, w = CELL_WIDTH + 1));
        for fg in 0..grid.len() {
            let cell = match grid.cell(bg, fg) {
                Some(contrast) if filter.shows(&contrast) => contrast.to_string(),
                _ => "-".to_string(),
            };
            out.push_str(&format!("{cell:>w$}", w = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}
