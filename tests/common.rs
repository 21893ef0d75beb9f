use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;

/// Get a Command for routefind with config and log environment isolated
pub fn routefind() -> Command {
    let mut cmd = cargo_bin_cmd!("routefind");
    cmd.env(
        "ROUTEFIND_CONFIG_DIR",
        PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("routefind-no-config"),
    )
    .env_remove("RUST_LOG")
    .env_remove("ROUTEFIND_LOG")
    .env_remove("ROUTEFIND_LOG_LEVEL");
    cmd
}

/// Path to a file under tests/golden
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(name)
}

#[allow(dead_code)]
pub fn romania_input() -> String {
    std::fs::read_to_string(fixture("romania.txt")).expect("romania fixture")
}
