//! Shared helpers for end-to-end CLI tests.
//!
//! Each test gets an isolated set of data/lite/monitor directories inside a
//! temp dir; the binary is pointed at them through the BATCHFLOW_* override
//! environment variables.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the batchflow binary (set by cargo at compile time).
pub fn batchflow_bin() -> &'static str {
    env!("CARGO_BIN_EXE_batchflow")
}

/// An isolated on-disk environment for one test.
pub struct TestEnv {
    temp: TempDir,
}

impl TestEnv {
    /// Creates a fresh environment with an existing (empty) data directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp.path().join("data")).unwrap();
        Self { temp }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp.path().join("data")
    }

    pub fn lite_dir(&self) -> PathBuf {
        self.temp.path().join("lite")
    }

    pub fn monitor_dir(&self) -> PathBuf {
        self.temp.path().join("monitor")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("batchflow_settings.json")
    }

    /// Writes a catalog file with the given `beverages` array (JSON text).
    fn write_catalog(&self, dir: PathBuf, entries: &str) {
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("beverages_library.json"),
            format!(r#"{{"beverages": {entries}}}"#),
        )
        .unwrap();
    }

    pub fn write_local_catalog(&self, entries: &str) {
        self.write_catalog(self.data_dir(), entries);
    }

    pub fn write_lite_catalog(&self, entries: &str) {
        self.write_catalog(self.lite_dir(), entries);
    }

    pub fn write_monitor_catalog(&self, entries: &str) {
        self.write_catalog(self.monitor_dir(), entries);
    }

    /// Writes a style catalog into the data directory.
    pub fn write_styles(&self, content: &str) {
        fs::write(self.data_dir().join("styles.json"), content).unwrap();
    }

    /// Runs the batchflow binary with this environment's directories.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(batchflow_bin())
            .args(args)
            .env("BATCHFLOW_DATA_DIR", self.data_dir())
            .env("BATCHFLOW_LITE_DIR", self.lite_dir())
            .env("BATCHFLOW_MONITOR_DIR", self.monitor_dir())
            .output()
            .expect("Failed to execute command")
    }

    /// Runs the binary and asserts a zero exit, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_eq!(
            output.status.code(),
            Some(0),
            "Command {:?} failed. stderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Runs the binary, asserts a zero exit, and parses stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout).expect("Output was not valid JSON")
    }
}
