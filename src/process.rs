//! Centralized command execution with consistent error handling.
//!
//! Every tool is run with an explicit argument vector (never through a
//! shell) and both output streams captured, so a failure can be reported
//! with the exact command line and whatever the tool printed.

use anyhow::Result;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

use crate::config::{Tool, ToolConfig};
use crate::error::ConversionError;

/// Result of a command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit status of the command.
    pub status: ExitStatus,
    /// Captured stdout as a string.
    pub stdout: String,
    /// Captured stderr as a string.
    pub stderr: String,
}

impl CommandResult {
    /// Returns true if the command exited successfully.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get the exit code, or -1 if terminated by signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    /// Stdout followed by stderr, for diagnostics.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        if !out.is_empty() && !self.stderr.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&self.stderr);
        out
    }
}

/// Builder for configuring command execution.
pub struct Cmd {
    program: String,
    args: Vec<OsString>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
        }
    }

    /// Add a single argument. Paths are passed through byte for byte.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_os_string());
        }
        self
    }

    /// Run the command and capture output.
    ///
    /// A non-zero exit is returned as [`ConversionError::CommandFailed`].
    pub fn run(self) -> Result<CommandResult> {
        debug!(program = %self.program, args = ?self.args, "running command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| ConversionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let result = CommandResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() {
            return Err(ConversionError::CommandFailed {
                output: result.combined(),
                code: result.code(),
                args: self
                    .args
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect(),
                program: self.program,
            }
            .into());
        }

        Ok(result)
    }
}

/// A path as a command argument, without any re-encoding.
pub fn path_arg(path: &Path) -> OsString {
    path.as_os_str().to_os_string()
}

// =============================================================================
// Runner seam
// =============================================================================

/// Runs host tools on behalf of the conversions.
///
/// Returns the tool's combined output on success. Implementations must
/// report a non-zero exit as an error; tests substitute a recording runner.
pub trait CommandRunner {
    fn run(&self, tool: Tool, args: &[OsString]) -> Result<String>;
}

/// Runs the real host tools, resolving program names through [`ToolConfig`].
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    config: ToolConfig,
}

impl SystemRunner {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Runner using overrides from the environment.
    pub fn from_env() -> Self {
        Self::new(ToolConfig::load())
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, tool: Tool, args: &[OsString]) -> Result<String> {
        let result = Cmd::new(self.config.program(tool)).args(args).run()?;
        Ok(result.combined())
    }
}

// =============================================================================
// Convenience functions
// =============================================================================

/// Check if a program exists in PATH (or at the given path).
///
/// Returns the full path if found, None otherwise.
pub fn which(program: &str) -> Option<String> {
    which::which(program)
        .ok()
        .map(|path| path.to_string_lossy().into_owned())
}

/// Check if a program exists in PATH (bool version).
pub fn exists(program: &str) -> bool {
    which(program).is_some()
}

// =============================================================================
// Tests
// =============================================================================
