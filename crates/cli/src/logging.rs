// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr, kept apart from command output on stdout.

use tracing_subscriber::EnvFilter;

use crate::env;

/// `NETDIAG_LOG` wins; otherwise `-v` raises the level one step at a time.
pub fn directive(verbose: u8, from_env: Option<String>) -> String {
    from_env.unwrap_or_else(|| {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
        .to_string()
    })
}

pub fn init(verbose: u8) {
    let directive = directive(verbose, env::log_filter());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
