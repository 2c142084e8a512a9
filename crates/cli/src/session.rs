// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs commands for the presentation layer: echo, execute, render, record.

use std::io::Write;
use std::sync::Arc;

use netdiag_shell::CommandExecutor;

use crate::exit_error::{ExitError, EXIT_FAILED, EXIT_STARTUP};
use crate::output::{self, OutputFormat};
use crate::transcript::Transcript;

/// How a single command ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Succeeded,
    /// Ran but exited non-zero, died on a signal, or timed out.
    Failed,
    /// Never ran.
    StartupFailed,
}

impl Outcome {
    /// Process exit code for a batch of outcomes: the worst one wins.
    pub fn exit_code(outcomes: &[Outcome]) -> i32 {
        match outcomes.iter().max() {
            None | Some(Outcome::Succeeded) => 0,
            Some(Outcome::Failed) => EXIT_FAILED,
            Some(Outcome::StartupFailed) => EXIT_STARTUP,
        }
    }

    pub fn into_result(outcomes: &[Outcome]) -> Result<(), ExitError> {
        match Self::exit_code(outcomes) {
            0 => Ok(()),
            code => Err(ExitError::silent(code)),
        }
    }
}

pub struct Session {
    executor: Arc<dyn CommandExecutor>,
    format: OutputFormat,
    transcript: Transcript,
}

impl Session {
    pub fn new(executor: Arc<dyn CommandExecutor>, format: OutputFormat) -> Self {
        Self { executor, format, transcript: Transcript::new() }
    }

    /// Run `command`, print its output to `out`, and append it to the transcript.
    ///
    /// Runner failures become an [`Outcome`]; only writing to `out` can fail.
    pub async fn execute<W: Write>(&mut self, command: &str, out: &mut W) -> std::io::Result<Outcome> {
        output::write_echo(out, command, self.format)?;
        match self.executor.run(command).await {
            Ok(result) => {
                output::write_result(out, &result, self.format)?;
                self.transcript.record(&result);
                Ok(if result.succeeded { Outcome::Succeeded } else { Outcome::Failed })
            }
            Err(err) => {
                tracing::debug!(%command, error = %err, "command did not start");
                output::write_run_error(out, command, &err, self.format)?;
                self.transcript.record_error(command, &err);
                Ok(Outcome::StartupFailed)
            }
        }
    }

    /// Run each command in order, regardless of earlier failures.
    pub async fn execute_all<W: Write>(
        &mut self,
        commands: &[String],
        out: &mut W,
    ) -> std::io::Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(commands.len());
        for command in commands {
            outcomes.push(self.execute(command, out).await?);
        }
        Ok(outcomes)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
