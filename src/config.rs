//! Configuration for the host tools used by conversions.
//!
//! Each tool can be pointed at a different program through an environment
//! variable (e.g. `FIXTURE_QEMU_IMG=/opt/qemu/bin/qemu-img`). The binary
//! loads a `.env` file first; variables already set in the environment win.

use std::fmt;

/// Host tools the conversions shell out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Tar,
    Gzip,
    Xz,
    QemuImg,
    Cp,
}

impl Tool {
    pub const ALL: [Tool; 5] = [Tool::Tar, Tool::Gzip, Tool::Xz, Tool::QemuImg, Tool::Cp];

    /// Program run when no override is configured.
    pub fn default_program(self) -> &'static str {
        match self {
            Tool::Tar => "tar",
            Tool::Gzip => "gzip",
            Tool::Xz => "xz",
            Tool::QemuImg => "qemu-img",
            Tool::Cp => "cp",
        }
    }

    /// Environment variable that overrides the program.
    pub fn env_var(self) -> &'static str {
        match self {
            Tool::Tar => "FIXTURE_TAR",
            Tool::Gzip => "FIXTURE_GZIP",
            Tool::Xz => "FIXTURE_XZ",
            Tool::QemuImg => "FIXTURE_QEMU_IMG",
            Tool::Cp => "FIXTURE_CP",
        }
    }

    /// Package that usually provides the tool.
    pub fn package(self) -> &'static str {
        match self {
            Tool::Tar => "tar",
            Tool::Gzip => "gzip",
            Tool::Xz => "xz",
            Tool::QemuImg => "qemu-img",
            Tool::Cp => "coreutils",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_program())
    }
}

/// Resolved program for each tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub tar: String,
    pub gzip: String,
    pub xz: String,
    pub qemu_img: String,
    pub cp: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tar: Tool::Tar.default_program().to_string(),
            gzip: Tool::Gzip.default_program().to_string(),
            xz: Tool::Xz.default_program().to_string(),
            qemu_img: Tool::QemuImg.default_program().to_string(),
            cp: Tool::Cp.default_program().to_string(),
        }
    }
}

impl ToolConfig {
    /// Load overrides from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for tool in Tool::ALL {
            if let Some(value) = lookup(tool.env_var()) {
                let value = value.trim();
                if !value.is_empty() {
                    *config.slot_mut(tool) = value.to_string();
                }
            }
        }
        config
    }

    /// Program to run for `tool`.
    pub fn program(&self, tool: Tool) -> &str {
        match tool {
            Tool::Tar => &self.tar,
            Tool::Gzip => &self.gzip,
            Tool::Xz => &self.xz,
            Tool::QemuImg => &self.qemu_img,
            Tool::Cp => &self.cp,
        }
    }

    fn slot_mut(&mut self, tool: Tool) -> &mut String {
        match tool {
            Tool::Tar => &mut self.tar,
            Tool::Gzip => &mut self.gzip,
            Tool::Xz => &mut self.xz,
            Tool::QemuImg => &mut self.qemu_img,
            Tool::Cp => &mut self.cp,
        }
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        for tool in Tool::ALL {
            println!("  {}: {}", tool.env_var(), self.program(tool));
        }
    }
}
