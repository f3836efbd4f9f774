//! Error types for fixture conversion.
//!
//! Library functions return `anyhow::Result` with context added at each
//! layer; the root cause is always a [`ConversionError`], recoverable with
//! `err.downcast_ref::<ConversionError>()`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a fixture.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Format identifier is not in the format table
    #[error("format extension {0:?} not recognized")]
    UnrecognizedFormat(String),

    /// Tool ran but exited non-zero
    #[error(
        "OS command `{program} {}` failed (exit code {code})\nStdout/Stderr: {output}",
        .args.join(" ")
    )]
    CommandFailed {
        program: String,
        args: Vec<String>,
        code: i32,
        output: String,
    },

    /// Tool could not be started at all
    #[error("Failed to execute '{program}'. Is it installed?")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Tool reported success but the expected output is not there
    #[error("Failed to stat file {path:?}")]
    MissingOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source path has no file name to derive outputs from
    #[error("source path {0:?} has no file name")]
    InvalidSource(PathBuf),
}
