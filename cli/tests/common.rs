//! # Responder CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is its own test crate and pulls this in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// An `assert_cmd::Command` for the compiled `responder` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn responder_cmd() -> Command {
    Command::cargo_bin("responder").expect("Failed to find responder binary for testing")
}

/// A `responder` command isolated inside `dir`: it runs with `dir` as working
/// directory and as home/config directory, so no real user or project
/// configuration leaks into the test.
pub fn responder_cmd_in(dir: &Path) -> Command {
    let mut cmd = responder_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RESPONDER_DEFAULTS")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `lines` as a fallback file named `name` inside `dir`.
pub fn write_defaults(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).expect("Failed to write fallback file");
    path
}
