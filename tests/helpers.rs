//! Shared test utilities for fixture-format tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use fixture_format::{CommandRunner, ConversionError, Tool};

/// Test environment with a fixtures directory and a target directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Where original fixtures live
    pub fixtures: PathBuf,
    /// Conversion target directory
    pub target: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with temporary directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let fixtures = base.join("fixtures");
        let target = base.join("target");

        fs::create_dir_all(&fixtures).expect("Failed to create fixtures dir");
        fs::create_dir_all(&target).expect("Failed to create target dir");

        Self {
            _temp_dir: temp_dir,
            fixtures,
            target,
        }
    }

    /// Write a fixture file and return its path.
    pub fn fixture(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.fixtures.join(name);
        fs::write(&path, content).expect("Failed to create fixture");
        path
    }

    /// Names of the entries in the target directory, sorted.
    pub fn target_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.target)
            .expect("Failed to read target dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Records every tool invocation and simulates the tools on the filesystem.
///
/// The simulation mirrors what the real tools do to file names: `cp` copies
/// into the directory, `gzip`/`xz` replace their input with `<input>.gz`/
/// `<input>.xz`, `tar` and `qemu-img` write a new output file.
pub struct RecordingRunner {
    calls: RefCell<Vec<(Tool, Vec<String>)>>,
    fail_on: Option<Tool>,
    produce_output: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
            produce_output: true,
        }
    }

    /// Runner whose `tool` exits non-zero.
    pub fn failing_on(tool: Tool) -> Self {
        Self {
            fail_on: Some(tool),
            ..Self::new()
        }
    }

    /// Runner whose tools all exit zero but write nothing.
    pub fn without_output() -> Self {
        Self {
            produce_output: false,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<(Tool, Vec<String>)> {
        self.calls.borrow().clone()
    }

    /// How many times `tool` ran.
    pub fn count(&self, tool: Tool) -> usize {
        self.calls.borrow().iter().filter(|(t, _)| *t == tool).count()
    }

    fn simulate(&self, tool: Tool, args: &[OsString]) -> std::io::Result<()> {
        match tool {
            Tool::Cp => {
                // cp -f <src> <dir>
                let src = Path::new(&args[1]);
                let dir = Path::new(&args[2]);
                fs::copy(src, dir.join(src.file_name().unwrap()))?;
            }
            Tool::Tar => {
                // tar -cf <out> <src>
                let data = fs::read(&args[2])?;
                fs::write(&args[1], data)?;
            }
            Tool::Gzip | Tool::Xz => {
                let ext = if tool == Tool::Gzip { ".gz" } else { ".xz" };
                let mut out = args[0].clone();
                out.push(ext);
                fs::rename(&args[0], out)?;
            }
            Tool::QemuImg => {
                // qemu-img convert -f raw -O qcow2 <src> <out>
                let data = fs::read(&args[5])?;
                fs::write(&args[6], data)?;
            }
        }
        Ok(())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, tool: Tool, args: &[OsString]) -> anyhow::Result<String> {
        let rendered: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.calls.borrow_mut().push((tool, rendered.clone()));

        if self.fail_on == Some(tool) {
            return Err(ConversionError::CommandFailed {
                program: tool.default_program().to_string(),
                args: rendered,
                code: 1,
                output: "simulated failure".to_string(),
            }
            .into());
        }
        if self.produce_output {
            self.simulate(tool, args)?;
        }
        Ok(String::new())
    }
}

/// Build an argument vector from string slices.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Render a (UTF-8) path the way the recorder stores tool arguments.
pub fn p(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Returns false (and says so) when a host tool is missing.
pub fn have_tool(tool: &str) -> bool {
    if fixture_format::process::exists(tool) {
        true
    } else {
        eprintln!("skipping: '{}' not installed", tool);
        false
    }
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}

/// Assert that a file does not exist.
pub fn assert_not_exists(path: &Path) {
    assert!(!path.exists(), "Expected no file at: {}", path.display());
}
