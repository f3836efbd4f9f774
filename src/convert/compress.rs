//! gzip and xz steps.
//!
//! Both tools replace their input with `<input><ext>`, so they run on a
//! staged copy inside the target directory.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{ensure_staged, output_path, run_and_verify};
use crate::config::Tool;
use crate::format::Format;
use crate::process::{path_arg, CommandRunner};

/// Compress a staged copy of `src` into `<target_dir>/<name>.gz`.
pub fn gzip(src: &Path, target_dir: &Path, runner: &dyn CommandRunner) -> Result<PathBuf> {
    compress(Format::Gz, Tool::Gzip, src, target_dir, runner)
}

/// Compress a staged copy of `src` into `<target_dir>/<name>.xz`.
pub fn xz(src: &Path, target_dir: &Path, runner: &dyn CommandRunner) -> Result<PathBuf> {
    compress(Format::Xz, Tool::Xz, src, target_dir, runner)
}

fn compress(
    format: Format,
    tool: Tool,
    src: &Path,
    target_dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<PathBuf> {
    let staged = ensure_staged(src, target_dir, runner)?;
    let target = output_path(format, &staged, target_dir)?;

    run_and_verify(runner, tool, &[path_arg(&staged)], &target)?;
    Ok(target)
}
