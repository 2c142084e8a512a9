// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `netdiag run` - Run one catalog action

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use netdiag_core::{ActionId, CatalogError};
use tokio::io::BufReader;

use crate::app::App;
use crate::color;
use crate::exit_error::ExitError;
use crate::prompt::{ConfirmPolicy, Prompter};
use crate::session::Session;

#[derive(Args)]
pub struct RunArgs {
    /// Action to run (see `netdiag actions`)
    pub action: String,

    /// Host, domain, or service name for actions that take one
    pub target: Option<String>,

    /// Save a report after running
    #[arg(long)]
    pub save: bool,
}

pub async fn handle(app: &App, args: RunArgs) -> Result<()> {
    let (action, command) = resolve(app, &args)?;
    confirm(app, action, &command).await?;

    let mut session = Session::new(Arc::clone(&app.executor), app.format);
    let outcome = session.execute(&command, &mut std::io::stdout()).await?;
    super::finish(app, &session, &[outcome], args.save)
}

fn resolve(app: &App, args: &RunArgs) -> Result<(ActionId, String), ExitError> {
    let usage = |e: CatalogError| ExitError::usage(e.to_string());
    let action: ActionId = args.action.parse().map_err(usage)?;
    let command = app.catalog.command(action, args.target.as_deref()).map_err(usage)?;
    Ok((action, command))
}

async fn confirm(app: &App, action: ActionId, command: &str) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    match ConfirmPolicy::decide(action.safety(), app.assume_yes, interactive) {
        ConfirmPolicy::Skip | ConfirmPolicy::Assume => Ok(()),
        ConfirmPolicy::Refuse => Err(ExitError::usage(format!(
            "`{action}` is {} and needs confirmation; re-run with --yes",
            action.safety()
        ))
        .into()),
        ConfirmPolicy::Ask => {
            let mut err = std::io::stderr();
            if let Some(warning) = action.warning() {
                writeln!(err, "{}", color::error(warning))?;
            }
            let mut prompter = Prompter::new(BufReader::new(tokio::io::stdin()));
            if prompter.confirm(&mut err, &format!("Run `{command}`?")).await? {
                Ok(())
            } else {
                Err(ExitError::usage("cancelled").into())
            }
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
