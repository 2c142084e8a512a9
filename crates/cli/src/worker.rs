// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single task that runs the interactive menu's commands one at a time.
//!
//! Jobs queue on a channel of capacity one and each reply comes back on its
//! own oneshot, so commands never overlap.

use std::sync::Arc;

use async_trait::async_trait;
use netdiag_core::ExecutionResult;
use netdiag_shell::{CommandExecutor, RunError};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

struct Job {
    command: String,
    reply: oneshot::Sender<Result<ExecutionResult, RunError>>,
}

pub struct Worker {
    jobs: mpsc::Sender<Job>,
    task: JoinHandle<()>,
}

impl Worker {
    pub fn spawn(executor: Arc<dyn CommandExecutor>) -> Self {
        let (jobs, mut rx) = mpsc::channel::<Job>(1);
        let task = tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let result = executor.run(&job.command).await;
                if job.reply.send(result).is_err() {
                    tracing::debug!(command = %job.command, "result dropped; menu went away");
                }
            }
        });
        Self { jobs, task }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[async_trait]
impl CommandExecutor for Worker {
    async fn run(&self, command: &str) -> Result<ExecutionResult, RunError> {
        let gone = || RunError::Wait {
            command: command.to_string(),
            source: std::io::Error::other("worker stopped"),
        };
        let (reply, result) = oneshot::channel();
        self.jobs
            .send(Job { command: command.to_string(), reply })
            .await
            .map_err(|_| gone())?;
        result.await.map_err(|_| gone())?
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
