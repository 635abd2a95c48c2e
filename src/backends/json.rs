use anyhow::{Context, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::pipeline::generate::Palette;

use super::ExportBackend;

/// Pretty-printed `{ name, baseColor, palette: { shade: hex } }` document.
pub struct JsonBackend;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    name: &'a str,
    base_color: &'a str,
    palette: ShadeMap<'a>,
}

/// Shade -> hex map that keeps ramp order.
struct ShadeMap<'a>(&'a Palette);

impl Serialize for ShadeMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.shade, &entry.color)?;
        }
        map.end()
    }
}

impl ExportBackend for JsonBackend {
    fn name(&self) -> &str {
        "JSON"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn serialize(&self, palette: &Palette, color_name: &str) -> Result<String> {
        let document = Document {
            name: color_name,
            base_color: palette.seed(),
            palette: ShadeMap(palette),
        };
        serde_json::to_string_pretty(&document).context("failed to serialize palette as JSON")
    }
}
