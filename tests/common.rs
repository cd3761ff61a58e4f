//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing fixture files into temporary directories
//! and running the docrefs binary against them.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Sample collection with valid, empty and invalid documentation fields.
pub const COLLECTION_YAML: &str = r#"
- name: Disable telemetry
  docs:
    - https://docs.microsoft.com/en-us/windows/privacy/configure-windows-diagnostic-data
    - https://example.com/telemetry
- name: Clear caches
- name: Broken entry
  docs: [https://a.com, 42]
- name: Single link
  docs: www.example.org/guide
"#;

/// Writes file into directory, creating parent directories as needed.
///
/// # Returns
///
/// Full path of written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates temporary directory holding one fixture file.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn fixture(path: &str, content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let file = write_file(dir.path(), path, content)?;
    Ok((dir, file))
}

/// Runs docrefs binary with given arguments.
///
/// # Errors
///
/// Returns error if the binary cannot be spawned
pub fn run_docrefs(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_docrefs"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}
