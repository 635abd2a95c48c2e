use anyhow::Result;

use crate::pipeline::generate::Palette;

use super::ExportBackend;

/// Plain CSS custom properties, one per shade.
pub struct CssBackend;

impl ExportBackend for CssBackend {
    fn name(&self) -> &str {
        "CSS variables"
    }

    fn extension(&self) -> &str {
        "css"
    }

    fn serialize(&self, palette: &Palette, color_name: &str) -> Result<String> {
        let mut out = String::new();
        out.push_str("/* CSS Variables */\n");
        out.push_str(&format!("/* Generated from: {} */\n\n", palette.seed()));
        out.push_str(&root_block(palette, color_name));
        out.push('\n');
        out.push_str("/* Usage Examples */\n");
        for (class, property, shade) in [
            ("bg", "background-color", 50),
            ("bg", "background-color", 100),
            ("bg", "background-color", 500),
            ("bg", "background-color", 900),
            ("text", "color", 500),
            ("border", "border-color", 200),
        ] {
            out.push_str(&format!(
                ".{class}-{color_name}-{shade} {{ {property}: var(--color-{color_name}-{shade}); }}\n"
            ));
        }
        Ok(out)
    }
}

/// `:root { --color-<name>-<shade>: <hex>; ... }`
pub(crate) fn root_block(palette: &Palette, color_name: &str) -> String {
    let mut out = String::from(":root {\n");
    for entry in palette {
        out.push_str(&format!(
            "  --color-{color_name}-{}: {};\n",
            entry.shade, entry.color
        ));
    }
    out.push_str("}\n");
    out
}
