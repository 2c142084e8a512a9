// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `netdiag platform` - Show the detected host profile

use anyhow::Result;

use crate::app::App;
use crate::color;
use crate::output::OutputFormat;

pub fn handle(app: &App) -> Result<()> {
    let timeout = app
        .timeout
        .map(|t| format!("{}s", t.as_secs_f64()))
        .unwrap_or_else(|| "none".to_string());

    match app.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "platform": app.profile.platform,
                    "encoding": app.profile.encoding,
                    "shell": app.shell.to_string(),
                    "timeout_secs": app.timeout.map(|t| t.as_secs_f64()),
                    "report_dir": app.report_dir,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("{} {}", color::header("Detected system:"), app.profile.platform);
            println!("{} {}", color::context("Encoding:"), app.profile.encoding);
            println!("{} {}", color::context("Shell:"), app.shell);
            println!("{} {}", color::context("Timeout:"), timeout);
            println!("{} {}", color::context("Reports:"), app.report_dir.display());
        }
    }
    Ok(())
}
