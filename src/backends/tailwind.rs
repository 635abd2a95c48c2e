use anyhow::Result;

use crate::pipeline::generate::Palette;

use super::css::root_block;
use super::ExportBackend;

/// `tailwind.config.js` color scale, followed by the equivalent CSS variables.
pub struct TailwindBackend;

impl ExportBackend for TailwindBackend {
    fn name(&self) -> &str {
        "Tailwind"
    }

    fn extension(&self) -> &str {
        "js"
    }

    fn serialize(&self, palette: &Palette, color_name: &str) -> Result<String> {
        let mut out = String::new();
        out.push_str("/* Tailwind CSS Color Palette */\n");
        out.push_str(&format!("/* Generated from: {} */\n\n", palette.seed()));
        out.push_str("/* Add to your tailwind.config.js */\n");
        out.push_str("module.exports = {\n");
        out.push_str("  theme: {\n");
        out.push_str("    extend: {\n");
        out.push_str("      colors: {\n");
        out.push_str(&format!("        {color_name}: {{\n"));
        for entry in palette {
            out.push_str(&format!("          {}: '{}',\n", entry.shade, entry.color));
        }
        out.push_str("        },\n");
        out.push_str("      },\n");
        out.push_str("    },\n");
        out.push_str("  },\n");
        out.push_str("};\n\n");

        out.push_str("/* CSS Variables (alternative) */\n");
        out.push_str(&root_block(palette, color_name));
        out.push('\n');

        out.push_str("/* Usage Examples */\n");
        out.push_str(&format!(
            "/* Tailwind: bg-{color_name}-500 text-{color_name}-900 */\n"
        ));
        out.push_str(&format!(
            "/* CSS: background-color: var(--color-{color_name}-500); */\n"
        ));
        Ok(out)
    }
}
