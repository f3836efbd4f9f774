//! Preflight checks for fixture conversion.
//!
//! Verifies the host tools a set of formats shells out to are installed
//! before any conversion starts. Run with `fixture-format preflight`.

mod host_tools;
mod types;

use anyhow::{bail, Result};

use crate::config::ToolConfig;
use crate::format::Format;

pub use host_tools::required_tools;
pub use types::{CheckResult, CheckStatus, PreflightReport};

/// Check the tools `formats` need (all tools when empty).
pub fn check_tools(formats: &[Format], config: &ToolConfig) -> PreflightReport {
    PreflightReport {
        checks: host_tools::check_host_tools(formats, config),
    }
}

/// Check tools and bail if any are missing.
pub fn require_tools(formats: &[Format], config: &ToolConfig) -> Result<()> {
    let report = check_tools(formats, config);

    if !report.all_passed() {
        let missing: Vec<&str> = report
            .checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .map(|c| c.name.as_str())
            .collect();
        bail!(
            "Preflight failed: {} tool(s) missing: {}",
            report.fail_count(),
            missing.join(", ")
        );
    }

    Ok(())
}
