//! Convert command - runs a format pipeline on a fixture.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use fixture_format::{preflight, SystemRunner, ToolConfig};

use super::parse_pipeline;

/// Execute the convert command.
pub fn cmd_convert(
    src: &Path,
    target_dir: &Path,
    formats: &[String],
    dry_run: bool,
    config: ToolConfig,
) -> Result<()> {
    let pipeline = parse_pipeline(formats)?;

    if dry_run {
        println!("{}", pipeline.expected_output(src, target_dir)?.display());
        return Ok(());
    }

    if !src.exists() {
        anyhow::bail!("Source fixture not found: {}", src.display());
    }
    if !pipeline.is_empty() {
        preflight::require_tools(pipeline.formats(), &config)?;
    }
    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let out = pipeline.run(&SystemRunner::new(config), src, target_dir)?;
    println!("{}", out.display());
    Ok(())
}
