//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with a temporary working directory
//! - Library-tree and config-file builders
//! - A command builder running the binary inside the environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Commands built through [`TestEnv::command`] run with the temporary
/// directory as their working directory, so configs can use relative
/// `lib_path`/`out.dir` values the way real invocations do.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get the environment's working directory.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Get a command builder for the relinc binary, with the environment's
    /// directory as the working directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("relinc").expect("Failed to find relinc binary");
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Write a file under the environment, creating parent directories.
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file under the environment.
    pub fn read_file(&self, rel: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(rel)).expect("Failed to read test file")
    }

    /// Check existence of a path under the environment.
    pub fn exists(&self, rel: &str) -> bool {
        self.temp_path.join(rel).exists()
    }

    /// Write a JSON config file and return its (relative) name.
    pub fn write_config(&self, config: &serde_json::Value) -> &'static str {
        let text = serde_json::to_string_pretty(config).expect("Failed to serialize config");
        self.write_file("relinc.json", &text);
        "relinc.json"
    }

    /// Build the standard fixture library used by most flow tests:
    ///
    /// ```text
    /// lib/src/a/foo.cpp   #include <bar.h>
    /// lib/include/bar.h
    /// ```
    pub fn make_split_library(&self) {
        self.write_file("lib/src/a/foo.cpp", "#include <bar.h>\nint main() {}\n");
        self.write_file("lib/include/bar.h", "int x;\n");
    }
}
