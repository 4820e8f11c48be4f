//! Errors surfaced by the command-line host.

use std::io;
use std::path::PathBuf;

use hashmark_fmt::{ConfigError, SelectionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("'{}' is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("unknown command `{0}` (run `hashmark commands` to list them)")]
    UnknownCommand(String),

    #[error("{0}")]
    Usage(&'static str),
}
