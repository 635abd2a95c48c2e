use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::{format_color, Color as AppColor, ColorFormat};
use crate::pipeline::contrast::{best_text_color, ContrastFilter, ContrastGrid, Guideline};
use crate::pipeline::generate::Palette;

const SWATCH_WIDTH: u16 = 7;

fn to_color(hex: &str) -> Color {
    let c = AppColor::from_hex_or_black(hex);
    Color::Rgb(c.r, c.g, c.b)
}

/// A widget that renders the 11-shade ramp as a strip of colored swatches
/// with labels, followed by each swatch's value in the active notation.
/// Highlights the focused swatch.
pub struct PaletteWidget<'a> {
    palette: &'a Palette,
    format: ColorFormat,
    guideline: Guideline,
    selected: Option<usize>,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(
        palette: &'a Palette,
        format: ColorFormat,
        guideline: Guideline,
        selected: Option<usize>,
    ) -> Self {
        Self {
            palette,
            format,
            guideline,
            selected,
        }
    }

    /// Swatch strip. Each swatch is 7 chars wide with the shade centered on
    /// the colored background. Focused swatch gets bold + underline.
    fn swatch_row(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, entry) in self.palette.iter().enumerate() {
            let mut style = Style::default()
                .bg(to_color(&entry.color))
                .fg(to_color(best_text_color(&entry.color, self.guideline)));
            if self.selected == Some(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::styled(
                format!("{:^w$}", entry.shade.to_string(), w = SWATCH_WIDTH as usize),
                style,
            ));
        }
        Line::from(spans)
    }

    fn value_line(&self, i: usize) -> Line<'static> {
        let entry = &self.palette[i];
        let marker = if self.selected == Some(i) { ">" } else { " " };
        let style = if self.selected == Some(i) {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{marker}{:>4}  ", entry.shade)),
            Span::styled("  ", Style::default().bg(to_color(&entry.color))),
            Span::styled(format!("  {}", format_color(&entry.color, self.format)), style),
        ])
    }
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!("Palette ({})", self.format.label()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![self.swatch_row(), Line::from("")];
        lines.extend((0..self.palette.len()).map(|i| self.value_line(i)));

        // Contrast summary for the focused swatch
        if let Some(i) = self.selected.filter(|i| *i < self.palette.len()) {
            let entry = &self.palette[i];
            let on_white = self.guideline.measure(&entry.color, "#ffffff");
            let on_black = self.guideline.measure(&entry.color, "#000000");
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "  {}  {}  white {} ({})  black {} ({})",
                entry.shade,
                entry.color,
                on_white,
                on_white.rating(),
                on_black,
                on_black.rating(),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// The contrast grid: one row per background, one column per text color.
/// Each visible cell shows its score in the column's color on the row's
/// color; cells hidden by the filter are left blank on the background.
pub struct ContrastGridWidget<'a> {
    grid: &'a ContrastGrid,
    filter: ContrastFilter,
}

impl<'a> ContrastGridWidget<'a> {
    pub fn new(grid: &'a ContrastGrid, filter: ContrastFilter) -> Self {
        Self { grid, filter }
    }
}

impl Widget for ContrastGridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!(
            "{} contrast, {} ({})",
            self.grid.guideline(),
            self.filter,
            self.filter.description()
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = SWATCH_WIDTH as usize;
        let mut header = vec![Span::raw(format!("{:>width$}", ""))];
        header.extend(
            self.grid
                .colors()
                .iter()
                .map(|c| Span::raw(format!("{:>width$}", c.label))),
        );
        let mut lines = vec![Line::from(header)];

        for (bg, row) in self.grid.colors().iter().enumerate() {
            let mut spans = vec![Span::raw(format!("{:>width$}", row.label))];
            for (fg, column) in self.grid.colors().iter().enumerate() {
                let text = match self.grid.cell(bg, fg) {
                    Some(contrast) if self.filter.shows(&contrast) => contrast.to_string(),
                    _ => String::new(),
                };
                spans.push(Span::styled(
                    format!("{text:>width$}"),
                    Style::default().bg(to_color(&row.hex)).fg(to_color(&column.hex)),
                ));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
