//! Conversion steps - one per format.
//!
//! Every step follows the same shape:
//! 1. Stage the input into the target directory (gz, xz, raw only)
//! 2. Derive the output name from the input's base name
//! 3. Run one host tool
//! 4. Stat the output to confirm the tool actually produced it
//!
//! `gzip` and `xz` replace their input, so they always work on a staged copy
//! and never touch the original fixture. `tar` and `qemu-img` write a new
//! file and read the source in place.

mod archive;
mod compress;
mod disk;
mod stage;

use anyhow::Result;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use crate::config::Tool;
use crate::error::ConversionError;
use crate::format::{Format, EXT_QCOW2};
use crate::process::CommandRunner;

pub use archive::tar;
pub use compress::{gzip, xz};
pub use disk::qcow2;
pub use stage::{ensure_staged, noop};

/// Signature shared by all conversion steps.
pub type ConvertFn = fn(&Path, &Path, &dyn CommandRunner) -> Result<PathBuf>;

/// Path a conversion of `src` to `format` writes into `target_dir`.
///
/// For gz and xz, `src` is the staged copy, which has the same base name as
/// the original.
pub fn output_path(format: Format, src: &Path, target_dir: &Path) -> Result<PathBuf> {
    let name = file_name(src)?;
    let out = match format {
        Format::Tar | Format::Gz | Format::Xz => {
            let mut name = name.to_os_string();
            name.push(format.extension());
            name
        }
        Format::Qcow2 => qcow2_name(name),
        Format::Raw => name.to_os_string(),
    };
    Ok(target_dir.join(out))
}

/// Replace the first `.iso` in a file name with the qcow2 extension.
///
/// Works on the raw bytes, so names that are not UTF-8 keep every other
/// byte. Names without `.iso` are kept as-is.
pub fn qcow2_name(name: &OsStr) -> OsString {
    let bytes = name.as_bytes();
    match bytes.windows(4).position(|w| w == b".iso") {
        Some(at) => {
            let mut out = bytes[..at].to_vec();
            out.extend_from_slice(EXT_QCOW2.as_bytes());
            out.extend_from_slice(&bytes[at + 4..]);
            OsString::from_vec(out)
        }
        None => name.to_os_string(),
    }
}

fn file_name(src: &Path) -> Result<&OsStr> {
    src.file_name()
        .ok_or_else(|| ConversionError::InvalidSource(src.to_path_buf()).into())
}

/// Run `tool` and confirm `target` exists afterward.
fn run_and_verify(
    runner: &dyn CommandRunner,
    tool: Tool,
    args: &[OsString],
    target: &Path,
) -> Result<()> {
    runner.run(tool, args)?;
    fs::metadata(target).map_err(|source| ConversionError::MissingOutput {
        path: target.to_path_buf(),
        source,
    })?;
    Ok(())
}
