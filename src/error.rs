use thiserror::Error;

/// Failures reported at the application boundary. The color core itself
/// never fails; it echoes input back or falls back to black.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PalettorError {
    #[error("'{0}' is not a valid hex, hsl(...) or oklch(...) color")]
    InvalidColor(String),

    #[error("unknown preset '{0}'; run with --list-presets to see the available names")]
    UnknownPreset(String),
}
