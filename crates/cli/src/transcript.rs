// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accumulated session output, the text a saved report contains.

use netdiag_core::ExecutionResult;
use netdiag_shell::RunError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &ExecutionResult) {
        self.push_command(&result.command);
        self.text.push_str(&result.output_text);
        if result.timed_out {
            self.ensure_newline();
            self.text.push_str(&format!("[{}]\n", result.status_label()));
        }
    }

    pub fn record_error(&mut self, command: &str, err: &RunError) {
        self.push_command(command);
        if let Some(output) = err.output() {
            self.text.push_str(output);
            self.ensure_newline();
        }
        self.text.push_str(&format!("[error] {err}\n"));
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when there is nothing worth saving.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    fn push_command(&mut self, command: &str) {
        self.text.push_str(&format!("\n> {command}\n"));
    }

    fn ensure_newline(&mut self) {
        if !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
