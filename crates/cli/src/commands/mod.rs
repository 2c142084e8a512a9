// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod actions;
pub mod check;
pub mod exec;
pub mod menu;
pub mod platform;
pub mod run;

use anyhow::Result;
use netdiag_core::SystemClock;

use crate::app::App;
use crate::report;
use crate::session::{Outcome, Session};

/// Save the transcript if asked, then turn the outcomes into an exit status.
pub(crate) fn finish(app: &App, session: &Session, outcomes: &[Outcome], save: bool) -> Result<()> {
    if save {
        let path = report::save(session.transcript(), &app.report_dir, &SystemClock)?;
        eprintln!("Report saved: {}", path.display());
    }
    Outcome::into_result(outcomes)?;
    Ok(())
}
