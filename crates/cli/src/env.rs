// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

/// Config file path override
pub fn config_path() -> Option<PathBuf> {
    non_empty("NETDIAG_CONFIG").map(PathBuf::from)
}

/// Directory saved reports go to
pub fn report_dir() -> Option<PathBuf> {
    non_empty("NETDIAG_REPORT_DIR").map(PathBuf::from)
}

/// Command timeout override in milliseconds. Zero disables the timeout.
pub fn timeout() -> Option<Option<Duration>> {
    std::env::var("NETDIAG_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(|ms| (ms > 0).then(|| Duration::from_millis(ms)))
}

/// `tracing` filter directive, e.g. `netdiag_shell=debug`
pub fn log_filter() -> Option<String> {
    non_empty("NETDIAG_LOG")
}

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
