//! Errors of the command-line front end.

use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors of the command-line front end.
#[derive(Debug, Display, Error)]
pub(crate) enum Error {
    /// Unable to read {path:?}: {source}
    Read { path: PathBuf, source: io::Error },
    /// Unable to write {path:?}: {source}
    Write { path: PathBuf, source: io::Error },
    /// No input grid. Please specify --input or --resume.
    MissingInput,
    /// Unknown format of config file {path:?}. Expected .json, .yaml, .yml or .toml.
    UnknownConfigFormat { path: PathBuf },
    /// Invalid config file {path:?}: {message}
    ConfigParse { path: PathBuf, message: String },
    /// Invalid save file {path:?}: {message}
    SaveParse { path: PathBuf, message: String },
    /// Invalid grid in {path:?}: {source}
    Grid {
        path: PathBuf,
        source: cellsim_lib::Error,
    },
    /// {0}
    Simulation(#[from] cellsim_lib::Error),
}
