//! Tar archive step.

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{output_path, run_and_verify};
use crate::config::Tool;
use crate::format::Format;
use crate::process::{path_arg, CommandRunner};

/// Archive `src` into `<target_dir>/<name>.tar`.
///
/// The source is passed to tar exactly as given, so the member name is the
/// source path (tar strips a leading `/`).
pub fn tar(src: &Path, target_dir: &Path, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let target = output_path(Format::Tar, src, target_dir)?;
    let args = [OsString::from("-cf"), path_arg(&target), path_arg(src)];

    run_and_verify(runner, Tool::Tar, &args, &target)?;
    Ok(target)
}
