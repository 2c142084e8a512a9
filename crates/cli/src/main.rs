// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! netdiag - cross-platform network diagnostics

mod app;
mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;
mod prompt;
mod report;
mod session;
mod transcript;
mod worker;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::app::{App, GlobalArgs};
use crate::exit_error::{ExitError, EXIT_USAGE};

#[derive(Parser)]
#[command(
    name = "netdiag",
    version,
    about = "Run common network diagnostics with the host's own tools",
    styles = color::styles()
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detected platform, encoding, and shell
    Platform,
    /// List catalog actions and the commands they run
    Actions,
    /// Run a catalog action
    Run(commands::run::RunArgs),
    /// Run a raw command line through the host shell
    Exec(commands::exec::ExecArgs),
    /// Check internet connectivity (IP config, ping, DNS)
    Check(commands::check::CheckArgs),
    /// Interactive menu
    Menu,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", color::error(&format!("error: {}", exit.message)));
            }
            std::process::exit(exit.code);
        }
        eprintln!("{}", color::error(&format!("error: {err:#}")));
        std::process::exit(EXIT_USAGE);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let app = App::from_args(&cli.global)?;
    match command {
        Commands::Platform => commands::platform::handle(&app),
        Commands::Actions => commands::actions::handle(&app),
        Commands::Run(args) => commands::run::handle(&app, args).await,
        Commands::Exec(args) => commands::exec::handle(&app, args).await,
        Commands::Check(args) => commands::check::handle(&app, args).await,
        Commands::Menu => commands::menu::handle(&app).await,
    }
}
