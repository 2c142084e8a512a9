// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented prompts over any async reader.

use std::io::{self, Write};

use netdiag_core::Safety;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Reads answers one line at a time.
pub struct Prompter<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { lines: input.lines() }
    }

    /// Print `question` and read the trimmed answer. `None` at end of input.
    pub async fn ask<W: Write>(&mut self, out: &mut W, question: &str) -> io::Result<Option<String>> {
        write!(out, "{question}")?;
        out.flush()?;
        Ok(self.lines.next_line().await?.map(|line| line.trim().to_string()))
    }

    /// Ask a yes/no question. Anything but `y`/`yes` (including EOF) is no.
    pub async fn confirm<W: Write>(&mut self, out: &mut W, question: &str) -> io::Result<bool> {
        let answer = self.ask(out, &format!("{question} [y/N] ")).await?;
        Ok(answer.is_some_and(|a| matches!(a.to_ascii_lowercase().as_str(), "y" | "yes")))
    }
}

/// What to do before running an action of a given safety class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPolicy {
    /// Read-only; just run it.
    Skip,
    /// `--yes` was given.
    Assume,
    /// Ask on the terminal.
    Ask,
    /// No terminal to ask on and no `--yes`; do not run.
    Refuse,
}

impl ConfirmPolicy {
    pub fn decide(safety: Safety, assume_yes: bool, interactive: bool) -> Self {
        match (safety.needs_confirmation(), assume_yes, interactive) {
            (false, _, _) => ConfirmPolicy::Skip,
            (true, true, _) => ConfirmPolicy::Assume,
            (true, false, true) => ConfirmPolicy::Ask,
            (true, false, false) => ConfirmPolicy::Refuse,
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
