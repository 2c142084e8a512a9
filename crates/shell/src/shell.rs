// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host shell selection and command-line wrapping.

use std::path::{Path, PathBuf};

use netdiag_core::Platform;
use tokio::process::Command;

/// Exit code a POSIX shell uses for "command not found".
const POSIX_NOT_FOUND: i32 = 127;
/// Exit code a POSIX shell uses for "found but not executable".
const POSIX_NOT_EXECUTABLE: i32 = 126;
/// `cmd.exe` exit code for "is not recognized as an internal or external command".
const CMD_NOT_FOUND: i32 = 9009;

/// Diagnostics dash, bash, and zsh print when a program cannot be found.
const POSIX_NOT_FOUND_MARKERS: &[&str] =
    &[": not found", "command not found", "No such file or directory"];
const POSIX_NOT_EXECUTABLE_MARKERS: &[&str] = &["Permission denied"];
/// `cmd.exe` prints its message over two lines.
const CMD_NOT_FOUND_MARKERS: &[&str] =
    &["is not recognized as an internal or external command", "operable program or batch file"];

/// Why the shell could not start the requested program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupFailure {
    NotFound,
    NotExecutable,
}

/// Shell that interprets command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shell {
    /// `sh -c`, with stderr folded into stdout via `exec 2>&1`.
    Posix { program: PathBuf },
    /// `cmd /D /S /C`, with the command grouped and redirected `2>&1`.
    Cmd { program: PathBuf },
}

impl Shell {
    pub fn for_platform(platform: Platform) -> Self {
        if platform.is_windows() {
            let program = std::env::var_os("ComSpec")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("cmd.exe"));
            Shell::Cmd { program }
        } else {
            Shell::Posix { program: PathBuf::from("/bin/sh") }
        }
    }

    pub fn program(&self) -> &Path {
        match self {
            Shell::Posix { program } | Shell::Cmd { program } => program,
        }
    }

    /// Script text handed to the shell, merging stderr into stdout.
    pub fn wrap(&self, command: &str) -> String {
        match self {
            Shell::Posix { .. } => format!("exec 2>&1\n{command}"),
            Shell::Cmd { .. } => format!("({command}) 2>&1"),
        }
    }

    /// Build the process invocation for `command`.
    pub fn command(&self, command: &str) -> Command {
        let wrapped = self.wrap(command);
        let mut cmd = Command::new(self.program());
        match self {
            Shell::Posix { .. } => {
                cmd.arg("-c").arg(wrapped);
            }
            Shell::Cmd { .. } => cmd_args(&mut cmd, &wrapped),
        }
        cmd
    }

    /// Classify a finished command as one that never ran.
    ///
    /// The exit code alone is not enough: a program may exit 127 itself, and
    /// in `a && missing` the first command did run. Only output made up
    /// entirely of the shell's own diagnostic counts as a startup failure.
    pub fn startup_failure(&self, exit_code: i32, output: &str) -> Option<StartupFailure> {
        let (failure, markers) = match (self, exit_code) {
            (Shell::Posix { .. }, POSIX_NOT_FOUND) => {
                (StartupFailure::NotFound, POSIX_NOT_FOUND_MARKERS)
            }
            (Shell::Posix { .. }, POSIX_NOT_EXECUTABLE) => {
                (StartupFailure::NotExecutable, POSIX_NOT_EXECUTABLE_MARKERS)
            }
            (Shell::Cmd { .. }, CMD_NOT_FOUND) => (StartupFailure::NotFound, CMD_NOT_FOUND_MARKERS),
            _ => return None,
        };
        only_diagnostics(output, markers).then_some(failure)
    }
}

/// True when `output` has at least one line and every non-blank line
/// carries one of `markers`.
fn only_diagnostics(output: &str, markers: &[&str]) -> bool {
    let mut lines = output.lines().map(str::trim).filter(|line| !line.is_empty()).peekable();
    lines.peek().is_some() && lines.all(|line| markers.iter().any(|m| line.contains(m)))
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program().display())
    }
}

// cmd.exe does its own quote parsing, so the script goes through verbatim.
#[cfg(windows)]
fn cmd_args(cmd: &mut Command, wrapped: &str) {
    cmd.raw_arg(format!("/D /S /C \"{wrapped}\""));
}

#[cfg(not(windows))]
fn cmd_args(cmd: &mut Command, wrapped: &str) {
    cmd.args(["/D", "/S", "/C", wrapped]);
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
