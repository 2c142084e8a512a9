// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup wiring: config, host profile, catalog, and runner.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use netdiag_core::{Catalog, Config, HostProfile, Platform};
use netdiag_shell::{CommandExecutor, Shell, ShellRunner};

use crate::env;
use crate::output::OutputFormat;

/// Flags accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: <config dir>/netdiag/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t, global = true)]
    pub format: OutputFormat,

    /// Kill commands after this many seconds (0 = never)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Directory for saved reports
    #[arg(long, global = true, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Everything a command handler needs, computed once at startup.
pub struct App {
    pub profile: HostProfile,
    pub shell: Shell,
    pub catalog: Catalog,
    pub executor: Arc<dyn CommandExecutor>,
    pub timeout: Option<Duration>,
    pub report_dir: PathBuf,
    pub format: OutputFormat,
    pub assume_yes: bool,
}

impl App {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let config = load_config(args.config.as_deref())?;
        Self::build(args, &config, Platform::current())
    }

    pub fn build(args: &GlobalArgs, config: &Config, platform: Platform) -> Result<Self> {
        let profile = config.host_profile(platform)?;
        let catalog = config.catalog(platform)?;

        // --timeout > NETDIAG_TIMEOUT_MS > config
        let timeout = match (args.timeout, env::timeout()) {
            (Some(secs), _) => (secs > 0).then(|| Duration::from_secs(secs)),
            (None, Some(from_env)) => from_env,
            (None, None) => config.timeout(),
        };

        let report_dir = args
            .report_dir
            .clone()
            .or_else(env::report_dir)
            .or_else(|| config.report_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let shell = Shell::for_platform(platform);
        let mut runner = ShellRunner::new(profile).shell(shell.clone()).timeout(timeout);
        for (key, value) in &config.env {
            runner = runner.env(key, value);
        }
        tracing::debug!(
            platform = %profile.platform,
            encoding = %profile.encoding,
            timeout_secs = timeout.map(|t| t.as_secs()),
            "host profile ready"
        );

        Ok(Self {
            profile,
            shell,
            catalog,
            executor: Arc::new(runner),
            timeout,
            report_dir,
            format: args.format,
            assume_yes: args.yes,
        })
    }
}

/// Explicit paths (`--config`, `NETDIAG_CONFIG`) must exist; the default may not.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit.map(Path::to_path_buf).or_else(env::config_path) {
        return Config::load(&path).context("loading config");
    }
    match Config::default_path() {
        Some(path) => Config::load_or_default(&path).context("loading config"),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
