//! QCOW2 conversion from raw disk images.

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{output_path, run_and_verify};
use crate::config::Tool;
use crate::format::Format;
use crate::process::{path_arg, CommandRunner};

/// Convert raw `src` to qcow2 in `target_dir`.
///
/// `disk.iso` becomes `disk.qcow2`; a name without `.iso` is kept unchanged.
pub fn qcow2(src: &Path, target_dir: &Path, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let target = output_path(Format::Qcow2, src, target_dir)?;
    let mut args: Vec<OsString> = ["convert", "-f", "raw", "-O", "qcow2"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(path_arg(src));
    args.push(path_arg(&target));

    run_and_verify(runner, Tool::QemuImg, &args, &target)?;
    Ok(target)
}
