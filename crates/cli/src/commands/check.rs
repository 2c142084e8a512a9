// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `netdiag check` - Internet connectivity check (IP config, ping, DNS)

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::session::Session;

#[derive(Args)]
pub struct CheckArgs {
    /// Save a report after running
    #[arg(long)]
    pub save: bool,
}

pub async fn handle(app: &App, args: CheckArgs) -> Result<()> {
    let commands = app.catalog.internet_check();
    let mut session = Session::new(Arc::clone(&app.executor), app.format);
    let outcomes = session.execute_all(&commands, &mut std::io::stdout()).await?;
    super::finish(app, &session, &outcomes, args.save)
}
