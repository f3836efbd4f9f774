//! Format pipeline runner.
//!
//! Applies conversion steps left to right, feeding each step's output to the
//! next one. The first failing step aborts the pipeline; artifacts written by
//! earlier steps stay in the target directory for the caller to clean up.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::convert::{self, ConvertFn};
use crate::error::ConversionError;
use crate::format::Format;
use crate::process::{CommandRunner, SystemRunner};

struct FormatEntry {
    format: Format,
    convert: ConvertFn,
}

/// Format table. Built at compile time and never mutated.
static FORMAT_TABLE: [FormatEntry; 5] = [
    FormatEntry {
        format: Format::Gz,
        convert: convert::gzip,
    },
    FormatEntry {
        format: Format::Xz,
        convert: convert::xz,
    },
    FormatEntry {
        format: Format::Tar,
        convert: convert::tar,
    },
    FormatEntry {
        format: Format::Qcow2,
        convert: convert::qcow2,
    },
    FormatEntry {
        format: Format::Raw,
        convert: convert::noop,
    },
];

fn lookup(token: &str) -> Result<&'static FormatEntry, ConversionError> {
    Format::from_token(token)
        .and_then(|format| FORMAT_TABLE.iter().find(|entry| entry.format == format))
        .ok_or_else(|| ConversionError::UnrecognizedFormat(token.to_string()))
}

fn entry_for(format: Format) -> Result<&'static FormatEntry, ConversionError> {
    lookup(format.extension())
}

fn step(
    entry: &FormatEntry,
    src: &Path,
    target_dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<PathBuf> {
    let out = (entry.convert)(src, target_dir, runner)
        .with_context(|| format!("could not format test data ({} step)", entry.format))?;
    debug!(
        format = %entry.format,
        input = %src.display(),
        output = %out.display(),
        "conversion step done"
    );
    Ok(out)
}

/// Convert `src` through `formats` using the host tools.
///
/// Tool programs can be overridden through the environment, see
/// [`crate::config::ToolConfig`].
pub fn format_test_data<S: AsRef<str>>(
    src: &Path,
    target_dir: &Path,
    formats: &[S],
) -> Result<PathBuf> {
    format_test_data_with(&SystemRunner::from_env(), src, target_dir, formats)
}

/// Convert `src` through `formats`, running tools through `runner`.
///
/// Each identifier is looked up when its step is reached. An unrecognized
/// identifier fails before that step starts any process. With no formats,
/// `src` is returned unchanged.
pub fn format_test_data_with<S: AsRef<str>>(
    runner: &dyn CommandRunner,
    src: &Path,
    target_dir: &Path,
    formats: &[S],
) -> Result<PathBuf> {
    let mut current = src.to_path_buf();
    for token in formats {
        let entry = lookup(token.as_ref())?;
        current = step(entry, &current, target_dir, runner)?;
    }
    info!(src = %src.display(), out = %current.display(), "test data formatted");
    Ok(current)
}

/// A validated sequence of formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    formats: Vec<Format>,
}

impl Pipeline {
    pub fn new(formats: Vec<Format>) -> Self {
        Self { formats }
    }

    /// Resolve every identifier up front, failing on the first unknown one.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let formats = tokens
            .into_iter()
            .map(|token| lookup(token.as_ref()).map(|entry| entry.format))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { formats })
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Run every step in order and return the final artifact.
    pub fn run(&self, runner: &dyn CommandRunner, src: &Path, target_dir: &Path) -> Result<PathBuf> {
        let mut current = src.to_path_buf();
        for format in &self.formats {
            current = step(entry_for(*format)?, &current, target_dir, runner)?;
        }
        info!(pipeline = %self, out = %current.display(), "pipeline finished");
        Ok(current)
    }

    /// Path `run` would return, without running anything.
    pub fn expected_output(&self, src: &Path, target_dir: &Path) -> Result<PathBuf> {
        let mut current = src.to_path_buf();
        for format in &self.formats {
            current = convert::output_path(*format, &current, target_dir)?;
        }
        Ok(current)
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for format in &self.formats {
            f.write_str(format.extension())?;
        }
        Ok(())
    }
}

/// Path a pipeline over `formats` produces for `src`, computed from the
/// naming rules alone.
pub fn expected_output(src: &Path, target_dir: &Path, formats: &[Format]) -> Result<PathBuf> {
    Pipeline::new(formats.to_vec()).expected_output(src, target_dir)
}
