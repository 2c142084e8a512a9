// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `netdiag exec` - Run a raw command line through the host shell

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::session::Session;

#[derive(Args)]
pub struct ExecArgs {
    /// Save a report after running
    #[arg(long)]
    pub save: bool,

    /// Command line, handed to the shell as-is
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

pub async fn handle(app: &App, args: ExecArgs) -> Result<()> {
    let command = args.command.join(" ");
    let mut session = Session::new(Arc::clone(&app.executor), app.format);
    let outcome = session.execute(&command, &mut std::io::stdout()).await?;
    super::finish(app, &session, &[outcome], args.save)
}
