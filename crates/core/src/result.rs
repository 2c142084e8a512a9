// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of running one command line.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// Captured result of a single command invocation.
///
/// A non-zero exit is still a result: `output_text` holds whatever the
/// command wrote before failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// The exact command line submitted.
    pub command: String,
    /// Combined stdout and stderr, decoded lossily.
    pub output_text: String,
    /// True iff the process exited with status zero.
    pub succeeded: bool,
    /// Exit status, or `None` when the process was killed (signal or timeout).
    pub exit_code: Option<i32>,
    pub timed_out: bool,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

impl ExecutionResult {
    /// Result for a process that ran to completion (or died on a signal).
    pub fn exited(
        command: impl Into<String>,
        output_text: impl Into<String>,
        exit_code: Option<i32>,
        duration: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            output_text: output_text.into(),
            succeeded: exit_code == Some(0),
            exit_code,
            timed_out: false,
            duration,
        }
    }

    /// Result for a process the runner killed after its timeout elapsed.
    pub fn timed_out(
        command: impl Into<String>,
        output_text: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            output_text: output_text.into(),
            succeeded: false,
            exit_code: None,
            timed_out: true,
            duration,
        }
    }

    /// Short human description of how the process ended.
    pub fn status_label(&self) -> String {
        match (self.timed_out, self.exit_code) {
            (true, _) => format!("timed out after {}s", self.duration.as_secs()),
            (false, Some(code)) => format!("exit {code}"),
            (false, None) => "terminated by signal".to_string(),
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
