pub mod backends;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod presets;
pub mod render;
pub mod tui;
