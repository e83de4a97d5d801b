//! Common test utilities for Skipper integration tests.
//!
//! `TestProject` is an isolated project directory the real binary runs in,
//! so tests never depend on the repository's own working directory.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `skipper.toml` at the project root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.path().join("skipper.toml"), content).unwrap();
    }

    /// Create a file under the default `build/` output directory.
    pub fn write_build_file(&self, rel: &str, content: &str) {
        let path = self.path().join("build").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Run the skipper binary with `args` inside the project directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_skipper"))
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("failed to run skipper binary")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
