//! Helpers for running the real facebull binary.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERAL_ERROR: i32 = 1;
pub const EXIT_MALFORMED_INPUT: i32 = 2;
pub const EXIT_INFEASIBLE: i32 = 3;

pub const SAMPLE_INPUT: &str = "\
M1 C1 C2 277317
M2 C2 C1 26247
M3 C1 C3 478001
M4 C3 C1 23713
M5 C2 C3 98272
M6 C3 C2 5205
";

/// Write `text` to a temporary input file.
pub fn input_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp input");
    file.write_all(text.as_bytes()).expect("write temp input");
    file.flush().expect("flush temp input");
    file
}

/// Run the binary with `args`, isolated from ambient overrides.
pub fn run_facebull(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_facebull"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("FACEBULL__SEARCH__MAX_POPS")
        .env_remove("FACEBULL__SEARCH__PROGRESS_INTERVAL")
        .env_remove("FACEBULL__REPORT__VERIFY")
        .output()
        .expect("spawn facebull")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
