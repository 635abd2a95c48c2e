use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use palettor::cli::Args;
use palettor::pipeline::contrast::ContrastGrid;
use palettor::pipeline::generate::generate_color_palette;
use palettor::presets::PRESETS;
use palettor::{config, logging, render, tui};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose, args.tui)?;

    let cfg = config::load(args.config.as_deref()).context("load config")?;

    if args.list_presets {
        for (name, hex) in PRESETS {
            println!("{name:<8} {hex}");
        }
        return Ok(());
    }

    let seed = args.seed(&mut rand::rng())?;
    let format = args.format.unwrap_or(cfg.format);
    let guideline = args.guideline.unwrap_or(cfg.guideline);
    let filter = args.min.unwrap_or(cfg.filter);
    let name = args.name.clone().unwrap_or_else(|| cfg.name.clone());

    if args.tui {
        let config = config::Config {
            format,
            guideline,
            filter,
            ..cfg
        };
        return tui::run(tui::TuiApp::new(&seed, &config));
    }

    let palette = generate_color_palette(&seed);
    info!(seed = %seed, "generated palette");

    let mut stdout = std::io::stdout().lock();

    let export = args
        .export
        .or_else(|| args.output.as_ref().map(|_| cfg.export));
    if let Some(export) = export {
        let backend = export.backend();
        match &args.output {
            Some(path) => {
                backend.write_to(&palette, &name, path)?;
                info!(path = %path.display(), format = backend.name(), "wrote export");
            }
            None => write!(stdout, "{}", backend.serialize(&palette, &name)?)?,
        }
        return Ok(());
    }

    for line in render::ramp_lines(&palette, format) {
        writeln!(stdout, "{line}")?;
    }
    if args.preview {
        writeln!(stdout)?;
        writeln!(stdout, "{}", render::preview_line(&palette, guideline))?;
    }
    if args.contrast {
        let grid = ContrastGrid::new(&palette, guideline);
        writeln!(stdout)?;
        write!(stdout, "{}", render::grid_table(&grid, filter))?;
    }

    Ok(())
}
