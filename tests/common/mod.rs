//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

pub const CATALOG: &str = "\
id: L-1
section: Log In
feature: Can log in
---
Steps: Open the app and sign in
---
id: L-2
section: Log In
feature: Can log out
---
Steps: Press sign out
---
id: A-1
section: Admin
feature: Can ban users, with a reason
---
Steps: Ban someone
";

/// Isolated working directory and home for one CLI run
pub struct TestEnv {
    pub dir: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Environment with `cases.txt` holding [`CATALOG`]
    pub fn with_catalog() -> Self {
        let env = Self::new();
        env.write("cases.txt", CATALOG);
        env
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relative)).unwrap()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_testrun"));
        cmd.current_dir(self.dir.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("TESTRUN_SOURCE")
            .env_remove("TESTRUN_TITLE")
            .env_remove("TESTRUN_FORMAT");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
