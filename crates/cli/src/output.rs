// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of command results for the terminal.

use std::io::{self, Write};

use clap::ValueEnum;
use netdiag_core::ExecutionResult;
use netdiag_shell::RunError;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print the `> command` line shown before a command runs.
pub fn write_echo<W: Write>(out: &mut W, command: &str, format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "\n{}", color::header(&format!("> {command}")))?;
        out.flush()?;
    }
    Ok(())
}

pub fn write_result<W: Write>(
    out: &mut W,
    result: &ExecutionResult,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            write!(out, "{}", result.output_text)?;
            if !result.output_text.is_empty() && !result.output_text.ends_with('\n') {
                writeln!(out)?;
            }
            if !result.succeeded {
                writeln!(out, "{}", color::error(&format!("[{}]", result.status_label())))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(result).map_err(io::Error::other)?)?;
        }
    }
    out.flush()
}

pub fn write_run_error<W: Write>(
    out: &mut W,
    command: &str,
    err: &RunError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(output) = err.output().filter(|o| !o.trim().is_empty()) {
                write!(out, "{}", color::muted(output))?;
                if !output.ends_with('\n') {
                    writeln!(out)?;
                }
            }
            writeln!(out, "{}", color::error(&format!("[error] {err}")))?;
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "command": command,
                "error": err.to_string(),
                "kind": error_kind(err),
                "output": err.output(),
            });
            writeln!(out, "{obj}")?;
        }
    }
    out.flush()
}

fn error_kind(err: &RunError) -> &'static str {
    match err {
        RunError::EmptyCommand => "empty_command",
        RunError::SpawnFailed { .. } => "spawn_failed",
        RunError::NotFound { .. } => "not_found",
        RunError::NotExecutable { .. } => "not_executable",
        RunError::Wait { .. } => "wait_failed",
    }
}
