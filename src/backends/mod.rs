pub mod css;
pub mod json;
pub mod tailwind;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pipeline::generate::Palette;

pub use css::CssBackend;
pub use json::JsonBackend;
pub use tailwind::TailwindBackend;

/// Color name used in exported identifiers when none is configured.
pub const DEFAULT_COLOR_NAME: &str = "primary";

/// A serializer that turns a shade ramp into a snippet for some toolchain.
pub trait ExportBackend {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// File extension for written exports, without the dot.
    fn extension(&self) -> &str;

    /// Render `palette` with `color_name` used in generated identifiers.
    fn serialize(&self, palette: &Palette, color_name: &str) -> Result<String>;

    /// Write the rendered export to `path`.
    fn write_to(&self, palette: &Palette, color_name: &str, path: &Path) -> Result<()> {
        let content = self.serialize(palette, color_name)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {} export to {}", self.name(), path.display()))?;
        Ok(())
    }
}

/// Selectable export format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// tailwind.config.js color scale plus CSS variables
    #[default]
    Tailwind,
    /// CSS custom properties
    Css,
    /// JSON document keyed by shade
    Json,
}

impl ExportFormat {
    pub fn backend(self) -> &'static dyn ExportBackend {
        match self {
            ExportFormat::Tailwind => &TailwindBackend,
            ExportFormat::Css => &CssBackend,
            ExportFormat::Json => &JsonBackend,
        }
    }
}
