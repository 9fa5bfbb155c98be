use anyhow::{Context, Result};
use markdown2html_config::Config;
use markdown2html_engine::{RenderOptions, io};
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process,
};

/// Maps the user config onto the engine's dialect switches.
fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        inline_in_headings: config.render.inline_in_headings,
        blank_line_closes_list: config.render.blank_line_closes_list,
        trailing_newline: config.output.trailing_newline,
    }
}

fn run(source: &Path, destination: &Path, opts: &RenderOptions) -> Result<()> {
    let doc = io::convert_file(source, destination, opts).with_context(|| {
        format!(
            "converting {} to {}",
            source.display(),
            destination.display()
        )
    })?;
    log::debug!("{} html lines written", doc.lines.len());
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Paths need not be valid UTF-8.
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let [source, destination] = <[OsString; 2]>::try_from(args).unwrap_or_else(|_| {
        eprintln!("Usage: markdown2html <input_file> <output_file>");
        process::exit(1);
    });

    let source = PathBuf::from(source);
    let destination = PathBuf::from(destination);

    if !source.exists() {
        eprintln!("Missing {}", source.display());
        process::exit(1);
    }

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::debug!("No config at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&source, &destination, &render_options(&config)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
