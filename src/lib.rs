//! Fixture-format library exports.
//!
//! Converts a source fixture through a chain of archive, compression and
//! disk-image formats by running host tools (`tar`, `gzip`, `xz`,
//! `qemu-img`, `cp`), and returns the path of the final artifact.
//!
//! ```ignore
//! let image = fixture_format::format_test_data(
//!     Path::new("testdata/cirros.img"),
//!     tmp.path(),
//!     &[".gz", ".tar"],
//! )?;
//! // image == tmp/cirros.img.gz.tar
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod preflight;
pub mod process;

pub use config::{Tool, ToolConfig};
pub use convert::ensure_staged;
pub use error::ConversionError;
pub use format::Format;
pub use pipeline::{expected_output, format_test_data, format_test_data_with, Pipeline};
pub use process::{CommandRunner, SystemRunner};
