//! Common utilities for integration tests

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use std::path::PathBuf;

/// Isolated config directory for each test
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.child("config").path()).unwrap();
        Self { temp }
    }

    /// Create a Command for running postview with its config isolated in the temp dir
    pub fn postview(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("postview").unwrap();
        cmd.current_dir(&self.temp);
        cmd.env_remove("RUST_LOG");

        let config_dir = self.temp.child("config").to_path_buf();
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", &config_dir);
            cmd.env("USERPROFILE", self.temp.path());
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            cmd.env("HOME", self.temp.path());
        }

        cmd
    }

    /// Write a JSON fixture file and return its path
    pub fn write_fixture(&self, name: &str, json: &str) -> PathBuf {
        let fixture = self.temp.child(name);
        fixture.write_str(json).unwrap();
        fixture.to_path_buf()
    }
}
