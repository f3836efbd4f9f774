//! Format identifiers and their file extensions.

use std::fmt;

use serde::Serialize;

use crate::config::Tool;

/// Extension of tar archives.
pub const EXT_TAR: &str = ".tar";
/// Extension of gzip-compressed files.
pub const EXT_GZ: &str = ".gz";
/// Extension of xz-compressed files.
pub const EXT_XZ: &str = ".xz";
/// Extension of qcow2 disk images.
pub const EXT_QCOW2: &str = ".qcow2";

/// A conversion step a fixture can go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Tar,
    Gz,
    Xz,
    Qcow2,
    /// No conversion; the fixture is only staged into the target directory.
    Raw,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Tar,
        Format::Gz,
        Format::Xz,
        Format::Qcow2,
        Format::Raw,
    ];

    /// Identifier of this format in the format table (empty for `Raw`).
    pub fn extension(self) -> &'static str {
        match self {
            Format::Tar => EXT_TAR,
            Format::Gz => EXT_GZ,
            Format::Xz => EXT_XZ,
            Format::Qcow2 => EXT_QCOW2,
            Format::Raw => "",
        }
    }

    /// Resolve a format identifier.
    ///
    /// Accepts the extension with or without its leading dot (`".gz"` or
    /// `"gz"`), and the empty string for `Raw`. Case-sensitive.
    pub fn from_token(token: &str) -> Option<Format> {
        Self::ALL.into_iter().find(|format| {
            let ext = format.extension();
            ext == token || (!ext.is_empty() && ext.strip_prefix('.') == Some(token))
        })
    }

    /// Tools a conversion to this format runs, in invocation order.
    pub fn tools(self) -> &'static [Tool] {
        match self {
            Format::Tar => &[Tool::Tar],
            Format::Gz => &[Tool::Cp, Tool::Gzip],
            Format::Xz => &[Tool::Cp, Tool::Xz],
            Format::Qcow2 => &[Tool::QemuImg],
            Format::Raw => &[Tool::Cp],
        }
    }

    /// How the output file is named, for listings.
    pub fn naming_rule(self) -> &'static str {
        match self {
            Format::Tar => "<name>.tar",
            Format::Gz => "<name>.gz (compresses a staged copy)",
            Format::Xz => "<name>.xz (compresses a staged copy)",
            Format::Qcow2 => "<name> with \".iso\" replaced by \".qcow2\"",
            Format::Raw => "<name> (staged copy)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Tar => "tar",
            Format::Gz => "gz",
            Format::Xz => "xz",
            Format::Qcow2 => "qcow2",
            Format::Raw => "raw",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
