//! Shared helpers for specs: a scratch project and fluent assertions.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub use serde_json::Value;

/// Run `netdiag` with an empty home so no user config is picked up.
pub fn cli() -> Cli {
    Cli::new(None)
}

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Project whose config file holds `toml`.
    pub fn with_config(toml: &str) -> Self {
        let project = Self::empty();
        project.file("netdiag.toml", toml);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// Files under `rel`, by name.
    pub fn files_in(&self, rel: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.dir.path().join(rel)) else {
            return Vec::new();
        };
        let mut names: Vec<String> =
            entries.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
        names.sort();
        names
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// `netdiag` running in this project, using its `netdiag.toml` if present.
    pub fn netdiag(&self) -> Cli {
        let config = self.dir.path().join("netdiag.toml");
        let mut cli = Cli::new(Some(self.dir.path().to_path_buf()));
        if config.exists() {
            cli.cmd.env("NETDIAG_CONFIG", config);
        }
        cli
    }
}

pub struct Cli {
    cmd: Command,
    _home: TempDir,
}

impl Cli {
    fn new(cwd: Option<PathBuf>) -> Self {
        let home = TempDir::new().unwrap();
        let mut cmd = Command::cargo_bin("netdiag").unwrap();
        cmd.env("HOME", home.path())
            .env("XDG_CONFIG_HOME", home.path())
            .env("APPDATA", home.path())
            .env("NO_COLOR", "1")
            .env_remove("COLOR")
            .env_remove("NETDIAG_CONFIG")
            .env_remove("NETDIAG_REPORT_DIR")
            .env_remove("NETDIAG_TIMEOUT_MS")
            .env_remove("NETDIAG_LOG")
            .current_dir(cwd.as_deref().unwrap_or(home.path()));
        Self { cmd, _home: home }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit code 0.
    pub fn passes(self) -> Outcome {
        self.exits_with(0)
    }

    /// Run and require a non-zero exit code.
    pub fn fails(mut self) -> Outcome {
        let out = Outcome::from(self.cmd.output().unwrap());
        assert_ne!(out.code, 0, "expected failure\n{}", out.describe());
        out
    }

    pub fn fails_with(self, code: i32) -> Outcome {
        self.exits_with(code)
    }

    fn exits_with(mut self, code: i32) -> Outcome {
        let out = Outcome::from(self.cmd.output().unwrap());
        assert_eq!(out.code, code, "unexpected exit code\n{}", out.describe());
        out
    }
}

pub struct Outcome {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Outcome {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Outcome {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}\n{}", self.describe());
        self
    }

    /// Stdout parsed as one JSON document per line.
    pub fn json_lines(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }

    fn describe(&self) -> String {
        format!("exit: {}\n--- stdout\n{}\n--- stderr\n{}", self.code, self.stdout, self.stderr)
    }
}
