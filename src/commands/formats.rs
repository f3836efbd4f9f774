//! Formats command - lists the format table.

use anyhow::Result;
use serde::Serialize;

use fixture_format::{Format, ToolConfig};

#[derive(Serialize)]
struct FormatInfo<'a> {
    format: Format,
    extension: &'static str,
    tools: Vec<&'a str>,
    output: &'static str,
}

/// Execute the formats command.
pub fn cmd_formats(json: bool, config: &ToolConfig) -> Result<()> {
    let infos: Vec<FormatInfo> = Format::ALL
        .into_iter()
        .map(|format| FormatInfo {
            format,
            extension: format.extension(),
            tools: format.tools().iter().map(|t| config.program(*t)).collect(),
            output: format.naming_rule(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("Formats:");
    for info in &infos {
        println!(
            "  {:<6} {:<8} {:<18} {}",
            info.format.name(),
            format!("{:?}", info.extension),
            info.tools.join(" + "),
            info.output
        );
    }
    println!();
    config.print();
    Ok(())
}
