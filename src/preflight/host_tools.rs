//! Host tool availability checks.

use tracing::warn;

use crate::config::{Tool, ToolConfig};
use crate::format::Format;
use crate::process;

use super::types::CheckResult;

/// Tools needed by `formats`, deduplicated in first-seen order.
///
/// With no formats, every tool is listed.
pub fn required_tools(formats: &[Format]) -> Vec<Tool> {
    if formats.is_empty() {
        return Tool::ALL.to_vec();
    }

    let mut tools = Vec::new();
    for tool in formats.iter().flat_map(|f| f.tools().iter().copied()) {
        if !tools.contains(&tool) {
            tools.push(tool);
        }
    }
    tools
}

/// Check the tools needed by `formats` are installed.
pub fn check_host_tools(formats: &[Format], config: &ToolConfig) -> Vec<CheckResult> {
    required_tools(formats)
        .into_iter()
        .map(|tool| check_tool_exists(tool, config.program(tool)))
        .collect()
}

fn check_tool_exists(tool: Tool, program: &str) -> CheckResult {
    match process::which(program) {
        Some(path) => CheckResult::pass_with(program, &path),
        None => {
            warn!(tool = %tool, program, "host tool not found");
            let msg = format!(
                "Not found. Install '{}' package or set {}.",
                tool.package(),
                tool.env_var()
            );
            CheckResult::fail(program, &msg)
        }
    }
}
