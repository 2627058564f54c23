use std::path::PathBuf;
use thiserror::Error;

/// All recoverable failures surfaced by the crate.
///
/// Duplicate registration of an option name is deliberately *not* here: it is
/// a bug in the caller's declaration code and panics instead (see
/// [`Registry::var`](crate::Registry::var)).
#[derive(Debug, Error)]
pub enum ConfrcError {
    #[error("no such option '{name}'")]
    UnknownOption { name: String },

    #[error("invalid value '{value}' for option '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("missing '{delimiter}' in {path} (line {line})")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        delimiter: String,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[cfg(feature = "clap")]
    #[error("failed to parse command line: {0}")]
    Args(#[from] clap::Error),
}
