//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `convert` - Run a format pipeline on a fixture
//! - `formats` - List supported formats
//! - `preflight` - Check host tools

mod convert;
mod formats;
mod preflight;

use anyhow::Result;
use fixture_format::Pipeline;

pub use convert::cmd_convert;
pub use formats::cmd_formats;
pub use preflight::cmd_preflight;

/// Parse command-line format tokens. `raw` stands for the empty identifier,
/// which is awkward to type.
fn parse_pipeline(tokens: &[String]) -> Result<Pipeline> {
    Pipeline::parse(
        tokens
            .iter()
            .map(|token| if token == "raw" { "" } else { token.as_str() }),
    )
}
