//! Report fixtures and helpers for driving the `nrtest-summary` binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to a file under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run the binary with the given arguments
pub fn run_summary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nrtest-summary"))
        .args(args)
        .output()
        .expect("Failed to run nrtest-summary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
