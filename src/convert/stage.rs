//! Staging fixtures into the target directory.

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::file_name;
use crate::config::Tool;
use crate::process::{path_arg, CommandRunner};

/// Make sure a copy of `src` is present in `target_dir` and return its path.
///
/// If an entry with the same base name already exists there, nothing is
/// copied. Only the name is checked, not the content, so a stale file with
/// a matching name counts as staged.
pub fn ensure_staged(src: &Path, target_dir: &Path, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let staged = target_dir.join(file_name(src)?);

    if staged.exists() {
        debug!(path = %staged.display(), "already staged, skipping copy");
        return Ok(staged);
    }

    runner.run(
        Tool::Cp,
        &[OsString::from("-f"), path_arg(src), path_arg(target_dir)],
    )?;
    Ok(staged)
}

/// No conversion: stage the fixture and hand back the staged path.
pub fn noop(src: &Path, target_dir: &Path, runner: &dyn CommandRunner) -> Result<PathBuf> {
    ensure_staged(src, target_dir, runner)
}
