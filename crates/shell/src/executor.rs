// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seam between the presentation layer and command execution.

use async_trait::async_trait;
use netdiag_core::ExecutionResult;

use crate::error::RunError;
use crate::runner::ShellRunner;

/// Anything that can turn a command line into an [`ExecutionResult`].
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, command: &str) -> Result<ExecutionResult, RunError>;
}

#[async_trait]
impl CommandExecutor for ShellRunner {
    async fn run(&self, command: &str) -> Result<ExecutionResult, RunError> {
        ShellRunner::run(self, command).await
    }
}
