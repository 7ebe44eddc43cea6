//! Running a simulation from the command line.

use crate::{args::Args, error::Error};
use cellsim_lib::{Config, Grid, Simulator, SimulatorSer};
use log::info;
use std::{ffi::OsStr, fs, path::Path};
use tracing_subscriber::EnvFilter;

/// Installs the logger. Logs go to stderr.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub(crate) fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn run(args: Args) -> Result<(), Error> {
    let mut simulator = simulator(&args)?;

    let show = args.show;
    simulator.run_with(|generation, grid| {
        if generation <= show {
            println!("After generation {}:\n{}", generation, grid);
        }
    })?;

    write(&args.output, &simulator.grid().to_string())?;
    info!("Wrote {:?}", args.output);

    if let Some(path) = &args.save {
        let save = serde_json::to_string_pretty(&simulator.ser()).map_err(|e| {
            Error::SaveParse {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        write(path, &save)?;
        info!("Saved generation {} to {:?}", simulator.generation(), path);
    }
    Ok(())
}

/// Builds the simulator, either from a save file or from the input grid.
fn simulator(args: &Args) -> Result<Simulator, Error> {
    if let Some(path) = &args.resume {
        let text = read(path)?;
        let mut save: SimulatorSer =
            serde_json::from_str(&text).map_err(|e| Error::SaveParse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        save.config = apply_overrides(save.config, args);
        info!("Resuming {:?} at generation {}", path, save.generation);
        return Ok(save.simulator()?);
    }

    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };
    let config = apply_overrides(config, args);

    let path = args.input.as_ref().ok_or(Error::MissingInput)?;
    let grid = read_grid(path)?;
    info!("Read a {}x{} grid from {:?}", grid.rows(), grid.cols(), path);
    Ok(config.simulator(grid)?)
}

/// Command-line values win over the values from a file.
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(workers) = args.workers {
        config = config.set_workers(workers);
    }
    if let Some(generations) = args.generations {
        config = config.set_generations(generations);
    }
    config
}

fn read_grid(path: &Path) -> Result<Grid, Error> {
    read(path)?.parse().map_err(|source| Error::Grid {
        path: path.to_owned(),
        source,
    })
}

fn read_config(path: &Path) -> Result<Config, Error> {
    let text = read(path)?;
    parse_config(path, &text)
}

/// Parses a config file, choosing the format by the extension of `path`.
pub(crate) fn parse_config(path: &Path, text: &str) -> Result<Config, Error> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    let config: Result<Config, String> = match extension.as_deref() {
        Some("json") => serde_json::from_str(text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(text).map_err(|e| e.to_string()),
        _ => {
            return Err(Error::UnknownConfigFormat {
                path: path.to_owned(),
            })
        }
    };
    config.map_err(|message| Error::ConfigParse {
        path: path.to_owned(),
        message,
    })
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })
}

/// Writes a file, creating its parent directories first.
fn write(path: &Path, contents: &str) -> Result<(), Error> {
    let to_error = |source| Error::Write {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)
}
