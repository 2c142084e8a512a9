// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Saving the transcript to a timestamped plain-text report.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use netdiag_core::Clock;

use crate::transcript::Transcript;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("nothing to save")]
    Empty,

    #[error("failed to write report {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

/// `netdiag_report_YYYYMMDD_HHMM.txt`
pub fn file_name(at: DateTime<Local>) -> String {
    format!("netdiag_report_{}.txt", at.format("%Y%m%d_%H%M"))
}

/// Write the trimmed transcript to `dir` and return the file path.
///
/// A report from the same minute overwrites the earlier one.
pub fn save(transcript: &Transcript, dir: &Path, clock: &impl Clock) -> Result<PathBuf, ReportError> {
    if transcript.is_empty() {
        return Err(ReportError::Empty);
    }
    let text = transcript.text().trim();
    let path = dir.join(file_name(clock.now()));
    let write_err = |source| ReportError::Write { path: path.clone(), source };

    std::fs::create_dir_all(dir).map_err(write_err)?;
    std::fs::write(&path, text).map_err(write_err)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "saved report");
    Ok(path)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
