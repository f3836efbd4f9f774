//! Preflight command - checks host tools.

use anyhow::Result;

use fixture_format::{preflight, ToolConfig};

use super::parse_pipeline;

/// Execute the preflight command.
pub fn cmd_preflight(formats: &[String], strict: bool, config: &ToolConfig) -> Result<()> {
    let pipeline = parse_pipeline(formats)?;
    let report = preflight::check_tools(pipeline.formats(), config);
    report.print();

    if !report.all_passed() {
        if strict {
            anyhow::bail!(
                "Preflight failed: {} tool(s) missing. Install them or point the FIXTURE_* variables at them.",
                report.fail_count()
            );
        }
        println!("Some tools are missing. Use --strict to fail.");
    }
    Ok(())
}
