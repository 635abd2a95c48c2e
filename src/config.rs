use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::backends::{ExportFormat, DEFAULT_COLOR_NAME};
use crate::color::ColorFormat;
use crate::pipeline::contrast::{ContrastFilter, Guideline};

/// User defaults, read from `config.toml`. Command-line flags win over these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notation for printed swatches.
    pub format: ColorFormat,
    /// Color name used in exported identifiers.
    pub name: String,
    pub guideline: Guideline,
    /// Minimum contrast shown in the grid.
    pub filter: ContrastFilter,
    pub export: ExportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: ColorFormat::Hex,
            name: DEFAULT_COLOR_NAME.to_string(),
            guideline: Guideline::Apca,
            filter: ContrastFilter::Min45,
            export: ExportFormat::Tailwind,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "palettor", "palettor").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Load the config from `override_path` or the platform default location.
/// A missing file is not an error and yields the defaults.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("palettor-test-config-{name}"));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load(Some(Path::new("/nonexistent/palettor/config.toml"))).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = temp_config("partial", "format = \"oklch\"\nfilter = \"60+\"\n");
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.format, ColorFormat::Oklch);
        assert_eq!(cfg.filter, ContrastFilter::Min60);
        assert_eq!(cfg.name, "primary");
        assert_eq!(cfg.guideline, Guideline::Apca);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn full_file() {
        let path = temp_config(
            "full",
            "format = \"hsl\"\nname = \"brand\"\nguideline = \"wcag2\"\nfilter = \"All\"\nexport = \"json\"\n",
        );
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(
            cfg,
            Config {
                format: ColorFormat::Hsl,
                name: "brand".to_string(),
                guideline: Guideline::Wcag2,
                filter: ContrastFilter::All,
                export: ExportFormat::Json,
            }
        );
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn invalid_filter_is_a_parse_error() {
        let path = temp_config("bad-filter", "filter = \"50+\"\n");
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("unknown contrast filter"));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let raw = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back, Config::default());
    }
}
