// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run one command line and capture its combined output.

use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use netdiag_core::{ExecutionResult, HostProfile};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;

use crate::error::RunError;
use crate::shell::{Shell, StartupFailure};

/// How long to keep reading output after the process exits. Bounds the wait
/// when a backgrounded grandchild still holds the pipe open.
const DRAIN_GRACE: Duration = Duration::from_secs(2);

const READ_CHUNK: usize = 8 * 1024;

/// Executes command lines through the host shell.
///
/// Calls block (await) until the process terminates. There is no timeout
/// unless one is set with [`timeout`](Self::timeout); a hung command such as
/// a ping to an unreachable host waits for the tool's own limit.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    profile: HostProfile,
    shell: Shell,
    timeout: Option<Duration>,
    env: Vec<(String, String)>,
}

impl ShellRunner {
    pub fn new(profile: HostProfile) -> Self {
        Self {
            shell: Shell::for_platform(profile.platform),
            profile,
            timeout: None,
            env: Vec::new(),
        }
    }

    /// Kill commands still running after `limit`. `None` waits forever.
    pub fn timeout(mut self, limit: impl Into<Option<Duration>>) -> Self {
        self.timeout = limit.into();
        self
    }

    /// Set `key` in every command's environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    /// Run `command` and return its decoded output and exit status.
    ///
    /// A non-zero exit is `Ok` with `succeeded == false`. `Err` means the
    /// command could not be started at all.
    pub async fn run(&self, command: &str) -> Result<ExecutionResult, RunError> {
        if command.trim().is_empty() {
            return Err(RunError::EmptyCommand);
        }

        tracing::info!(%command, shell = %self.shell, "running command");
        let start = Instant::now();

        let mut child = self.spawn(command)?;
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut readers = [
            spawn_reader(child.stdout.take(), Arc::clone(&captured)),
            spawn_reader(child.stderr.take(), Arc::clone(&captured)),
        ];

        let status = match self.timeout {
            None => Some(child.wait().await.map_err(|source| wait_error(command, source))?),
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => Some(status.map_err(|source| wait_error(command, source))?),
                Err(_) => {
                    tracing::warn!(%command, limit_secs = limit.as_secs(), "command timed out");
                    kill_tree(&mut child).await;
                    None
                }
            },
        };

        let drained = tokio::time::timeout(DRAIN_GRACE, async {
            for reader in readers.iter_mut() {
                let _ = reader.await;
            }
        })
        .await;
        if drained.is_err() {
            tracing::debug!(%command, "output pipe still open after exit; truncating");
            for reader in &readers {
                reader.abort();
            }
        }

        let bytes = std::mem::take(&mut *captured.lock());
        let output_text = self.profile.encoding.decode(&bytes);
        let duration = start.elapsed();

        let Some(status) = status else {
            return Ok(ExecutionResult::timed_out(command, output_text, duration));
        };

        let exit_code = status.code();
        let failure = exit_code.and_then(|code| self.shell.startup_failure(code, &output_text));
        if let Some(failure) = failure {
            tracing::warn!(%command, ?failure, "command could not be started");
            let command = command.to_string();
            return Err(match failure {
                StartupFailure::NotFound => RunError::NotFound { command, output: output_text },
                StartupFailure::NotExecutable => {
                    RunError::NotExecutable { command, output: output_text }
                }
            });
        }

        let result = ExecutionResult::exited(command, output_text, exit_code, duration);
        if result.succeeded {
            tracing::debug!(%command, elapsed_ms = duration.as_millis() as u64, "command finished");
        } else {
            tracing::warn!(%command, status = %result.status_label(), "command failed");
        }
        Ok(result)
    }

    fn spawn(&self, command: &str) -> Result<Child, RunError> {
        let mut cmd = self.shell.command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .envs(self.env.iter().map(|(k, v)| (k, v)));
        // A separate process group lets a timeout kill the whole pipeline.
        // Only done when needed: a background group cannot prompt on the tty.
        #[cfg(unix)]
        if self.timeout.is_some() {
            cmd.process_group(0);
        }
        cmd.spawn().map_err(|source| RunError::SpawnFailed {
            command: command.to_string(),
            shell: self.shell.to_string(),
            source,
        })
    }
}

fn wait_error(command: &str, source: std::io::Error) -> RunError {
    RunError::Wait { command: command.to_string(), source }
}

fn spawn_reader<R>(stream: Option<R>, sink: Arc<Mutex<Vec<u8>>>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let Some(mut stream) = stream else {
            return;
        };
        let mut chunk = vec![0u8; READ_CHUNK];
        loop {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => sink.lock().extend_from_slice(&chunk[..n]),
            }
        }
    })
}

#[cfg(unix)]
async fn kill_tree(child: &mut Child) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    if let Some(pid) = child.id() {
        if let Err(e) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            tracing::debug!(pid, error = %e, "killpg failed, killing shell only");
        }
    }
    let _ = child.kill().await;
}

#[cfg(not(unix))]
async fn kill_tree(child: &mut Child) {
    let _ = child.kill().await;
}

#[cfg(all(test, unix))]
#[path = "runner_tests.rs"]
mod tests;
