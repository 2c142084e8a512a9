// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors for commands that could not be run at all.
//!
//! A command that starts and exits non-zero is not an error; it produces an
//! `ExecutionResult` with `succeeded == false`.

/// Failure to start (or wait on) a command.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Blank command line; nothing was spawned.
    #[error("empty command")]
    EmptyCommand,

    /// The shell process itself could not be spawned.
    #[error("failed to spawn `{shell}` for `{command}`: {source}")]
    SpawnFailed {
        command: String,
        shell: String,
        source: std::io::Error,
    },

    /// The shell ran but could not find the program.
    #[error("command not found: `{command}`")]
    NotFound { command: String, output: String },

    /// The shell found the program but was not allowed to execute it.
    #[error("permission denied: `{command}`")]
    NotExecutable { command: String, output: String },

    /// Waiting on a spawned process failed.
    #[error("failed waiting on `{command}`: {source}")]
    Wait {
        command: String,
        source: std::io::Error,
    },
}

impl RunError {
    /// The command line this error is about, if any.
    pub fn command(&self) -> Option<&str> {
        match self {
            RunError::EmptyCommand => None,
            RunError::SpawnFailed { command, .. }
            | RunError::NotFound { command, .. }
            | RunError::NotExecutable { command, .. }
            | RunError::Wait { command, .. } => Some(command),
        }
    }

    /// Diagnostic text the shell printed while failing to start the program.
    pub fn output(&self) -> Option<&str> {
        match self {
            RunError::NotFound { output, .. } | RunError::NotExecutable { output, .. } => {
                Some(output)
            }
            _ => None,
        }
    }

    /// True when the program never got to run.
    pub fn is_startup_failure(&self) -> bool {
        !matches!(self, RunError::Wait { .. })
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
