use std::path::PathBuf;

use clap::Parser;
use rand::Rng;

use crate::backends::ExportFormat;
use crate::color::{is_valid_hex_color, parse_color_string, ColorFormat};
use crate::error::PalettorError;
use crate::pipeline::contrast::{ContrastFilter, Guideline};
use crate::pipeline::generate::random_seed;
use crate::presets::preset;

/// Seed used when no color is given.
pub const DEFAULT_SEED: &str = "#808080";

/// Generate Tailwind-style shade ramps and contrast grids from a seed color.
#[derive(Parser, Debug)]
#[command(name = "palettor", version, about)]
pub struct Args {
    /// Seed color: #rgb, #rrggbb, hsl(H, S%, L%) or oklch(L% C% H)
    pub color: Option<String>,

    /// Use a named preset seed (see --list-presets)
    #[arg(short, long, conflicts_with_all = ["color", "random"])]
    pub preset: Option<String>,

    /// Use a random seed color
    #[arg(long, conflicts_with = "color")]
    pub random: bool,

    /// List the preset names and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Notation for printed swatches
    #[arg(short, long, value_enum)]
    pub format: Option<ColorFormat>,

    /// Print the palette in an export format instead of the swatch list
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Write the export to this file instead of stdout; without --export the
    /// configured export format is used
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Color name used in exported identifiers
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print the contrast grid
    #[arg(long)]
    pub contrast: bool,

    /// Contrast guideline for the grid
    #[arg(short, long, value_enum)]
    pub guideline: Option<Guideline>,

    /// Minimum contrast shown in the grid: All, 15, 30, 45, 60 or 75
    #[arg(long)]
    pub min: Option<ContrastFilter>,

    /// Print a colored terminal preview of the palette
    #[arg(long)]
    pub preview: bool,

    /// Launch interactive TUI mode
    #[arg(long)]
    pub tui: bool,

    /// Override config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve the seed color from `--preset`, `--random` or the positional
    /// color, falling back to [`DEFAULT_SEED`].
    pub fn seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, PalettorError> {
        if let Some(name) = &self.preset {
            return preset(name)
                .map(str::to_string)
                .ok_or_else(|| PalettorError::UnknownPreset(name.clone()));
        }
        if self.random {
            return Ok(random_seed(rng));
        }
        match &self.color {
            None => Ok(DEFAULT_SEED.to_string()),
            Some(input) => {
                let parsed = parse_color_string(input);
                if is_valid_hex_color(&parsed) {
                    Ok(parsed)
                } else {
                    Err(PalettorError::InvalidColor(input.clone()))
                }
            }
        }
    }
}
