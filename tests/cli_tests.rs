//! Tests for the fixture-format binary.

mod helpers;

use helpers::{assert_file_exists, TestEnv};
use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fixture-format"))
}

#[test]
fn test_dry_run_prints_expected_path() {
    let env = TestEnv::new();
    let src = env.fixtures.join("a.img");

    let output = cli()
        .arg("convert")
        .arg(&src)
        .arg(&env.target)
        .args(["gz", ".tar", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env.target.join("a.img.gz.tar").to_string_lossy()
    );
}

#[test]
fn test_unknown_format_fails() {
    let env = TestEnv::new();
    let src = env.fixture("a.img", b"data");

    let output = cli()
        .arg("convert")
        .arg(&src)
        .arg(&env.target)
        .arg("zip")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not recognized"));
    assert!(env.target_entries().is_empty());
}

#[test]
fn test_convert_raw_creates_target_dir() {
    let env = TestEnv::new();
    let src = env.fixture("a.img", b"data");
    let target = env.target.join("nested");

    let output = cli()
        .arg("convert")
        .arg(&src)
        .arg(&target)
        .arg("raw")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert_eq!(printed, target.join("a.img").to_string_lossy());
    assert_file_exists(&target.join("a.img"));
}

#[test]
fn test_formats_json() {
    let output = cli().args(["formats", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["format"], "tar");
    assert_eq!(entries[0]["extension"], ".tar");
    assert_eq!(entries[4]["format"], "raw");
    assert_eq!(entries[4]["extension"], "");
}

#[test]
fn test_preflight_strict_fails_on_missing_tool() {
    let output = cli()
        .args(["preflight", "qcow2", "--strict"])
        .env("FIXTURE_QEMU_IMG", "nonexistent_program_12345")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("nonexistent_program_12345"));
}

#[test]
fn test_dotenv_file_is_loaded_and_environment_wins() {
    let env = TestEnv::new();
    std::fs::write(
        env.fixtures.join(".env"),
        "FIXTURE_QEMU_IMG=nonexistent_program_12345\n",
    )
    .unwrap();

    let from_file = cli()
        .current_dir(&env.fixtures)
        .env_remove("FIXTURE_QEMU_IMG")
        .args(["preflight", "qcow2", "--strict"])
        .output()
        .unwrap();

    assert!(!from_file.status.success());
    assert!(String::from_utf8_lossy(&from_file.stdout).contains("nonexistent_program_12345"));

    let overridden = cli()
        .current_dir(&env.fixtures)
        .env("FIXTURE_QEMU_IMG", "sh")
        .args(["preflight", "qcow2", "--strict"])
        .output()
        .unwrap();

    assert!(
        overridden.status.success(),
        "{}",
        String::from_utf8_lossy(&overridden.stdout)
    );
    assert!(!String::from_utf8_lossy(&overridden.stdout).contains("nonexistent_program_12345"));
}
