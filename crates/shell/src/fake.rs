// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted executor for tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use netdiag_core::ExecutionResult;
use parking_lot::Mutex;

use crate::error::RunError;
use crate::executor::CommandExecutor;

/// Canned outcome for one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeOutcome {
    Exit { code: i32, output: String },
    TimedOut { output: String },
    NotFound,
}

impl FakeOutcome {
    pub fn ok(output: impl Into<String>) -> Self {
        FakeOutcome::Exit { code: 0, output: output.into() }
    }

    pub fn fail(code: i32, output: impl Into<String>) -> Self {
        FakeOutcome::Exit { code, output: output.into() }
    }
}

/// Executor that returns scripted outcomes and records every call.
///
/// Commands without a scripted outcome succeed with empty output.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    outcomes: Arc<Mutex<HashMap<String, FakeOutcome>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, command: impl Into<String>, outcome: FakeOutcome) -> Self {
        self.outcomes.lock().insert(command.into(), outcome);
        self
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CommandExecutor for FakeExecutor {
    async fn run(&self, command: &str) -> Result<ExecutionResult, RunError> {
        if command.trim().is_empty() {
            return Err(RunError::EmptyCommand);
        }
        self.calls.lock().push(command.to_string());
        let outcome = self.outcomes.lock().get(command).cloned();
        match outcome.unwrap_or_else(|| FakeOutcome::ok("")) {
            FakeOutcome::Exit { code, output } => {
                Ok(ExecutionResult::exited(command, output, Some(code), Duration::ZERO))
            }
            FakeOutcome::TimedOut { output } => {
                Ok(ExecutionResult::timed_out(command, output, Duration::from_secs(1)))
            }
            FakeOutcome::NotFound => Err(RunError::NotFound {
                command: command.to_string(),
                output: format!("sh: 1: {command}: not found\n"),
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
