//! Common test helpers and fixtures for integration tests.
//!
//! The `TestHarness` provides test isolation by creating a temporary
//! directory holding a `libexec/`-style script directory, and by
//! scrubbing `SCRIPTMAN_*` environment variables from spawned commands
//! so ambient configuration cannot leak into assertions.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables the config layer reads; cleared per command.
const CONFIG_ENV_VARS: &[&str] = &[
    "SCRIPTMAN_SCRIPT_DIR",
    "SCRIPTMAN_SCRIPT_EXT",
    "SCRIPTMAN_COMMAND_NAME",
    "SCRIPTMAN_LAUNCHER_NAME",
];

pub struct TestHarness {
    temp: TempDir,
    script_dir: PathBuf,
}

impl TestHarness {
    /// Create a harness with an empty `scripts/` directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let script_dir = temp.path().join("scripts");
        std::fs::create_dir(&script_dir).expect("create script dir");
        Self { temp, script_dir }
    }

    /// Root of the temp workspace (used as the command's working dir).
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Directory scripts are written into.
    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    /// Write an executable `/bin/sh` script into the script directory.
    #[cfg(unix)]
    pub fn add_script(&self, file_name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.script_dir.join(file_name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        path
    }

    /// Write a plain (non-executable) file into the script directory.
    pub fn add_file(&self, file_name: &str, body: &str) -> PathBuf {
        let path = self.script_dir.join(file_name);
        std::fs::write(&path, body).expect("write file");
        path
    }

    /// Write a config file at the workspace root.
    pub fn add_config(&self, contents: &str) -> PathBuf {
        let path = self.temp.path().join("scriptman.toml");
        std::fs::write(&path, contents).expect("write config");
        path
    }

    /// A `scriptman` command rooted in the harness with a clean config
    /// environment and the script dir preselected.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.raw_cmd();
        cmd.arg("--script-dir").arg(&self.script_dir);
        cmd
    }

    /// Like [`Self::cmd`] but without the `--script-dir` flag, for tests
    /// exercising config files and environment variables.
    pub fn raw_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("scriptman").expect("binary builds");
        cmd.current_dir(self.temp.path());
        for var in CONFIG_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}
