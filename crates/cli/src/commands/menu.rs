// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `netdiag menu` - Interactive category menu
//!
//! Commands go through a single [`Worker`] task, which runs them one at a
//! time; the menu waits for each reply before reading more input.
//! Everything run in the menu lands in one transcript that can be saved or
//! cleared from the main screen.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use netdiag_core::{ActionId, Catalog, Category, Clock, HostProfile, SystemClock};
use netdiag_shell::CommandExecutor;
use tokio::io::{AsyncBufRead, BufReader};

use crate::app::App;
use crate::color;
use crate::output::OutputFormat;
use crate::prompt::{ConfirmPolicy, Prompter};
use crate::report::{self, ReportError};
use crate::session::Session;
use crate::worker::Worker;

pub async fn handle(app: &App) -> Result<()> {
    let executor: Arc<dyn CommandExecutor> = Arc::new(Worker::spawn(Arc::clone(&app.executor)));
    let mut menu = Menu {
        prompter: Prompter::new(BufReader::new(tokio::io::stdin())),
        out: std::io::stdout(),
        catalog: &app.catalog,
        profile: app.profile,
        report_dir: app.report_dir.clone(),
        assume_yes: app.assume_yes,
        clock: SystemClock,
        session: Session::new(executor, OutputFormat::Text),
    };
    menu.run().await
}

/// Whether the menu keeps going after a screen returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Menu<'a, R, W, C> {
    prompter: Prompter<R>,
    out: W,
    catalog: &'a Catalog,
    profile: HostProfile,
    report_dir: PathBuf,
    assume_yes: bool,
    clock: C,
    session: Session,
}

impl<R, W, C> Menu<'_, R, W, C>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    C: Clock,
{
    async fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            color::header(&format!(
                "netdiag - detected system: {} ({})",
                self.profile.platform, self.profile.encoding
            ))
        )?;

        while self.main_screen().await? == Flow::Continue {}
        Ok(())
    }

    async fn main_screen(&mut self) -> Result<Flow> {
        writeln!(self.out)?;
        for (n, category) in Category::ALL.iter().enumerate() {
            writeln!(self.out, "  {}) {}", color::literal(&(n + 1).to_string()), category.label())?;
        }
        writeln!(self.out, "  {}) Internet check", color::literal("i"))?;
        writeln!(self.out, "  {}) Save report", color::literal("s"))?;
        writeln!(self.out, "  {}) Clear results", color::literal("c"))?;
        writeln!(self.out, "  {}) Quit", color::literal("q"))?;

        let Some(choice) = self.prompter.ask(&mut self.out, "> ").await? else {
            return Ok(Flow::Quit);
        };
        match choice.to_ascii_lowercase().as_str() {
            "q" => return Ok(Flow::Quit),
            "i" => self.internet_check().await?,
            "s" => self.save()?,
            "c" => {
                self.session.clear();
                writeln!(self.out, "Results cleared.")?;
            }
            other => match pick(Category::ALL, other) {
                Some(category) => return self.category_screen(category).await,
                None => writeln!(self.out, "{}", color::error(&format!("Unknown choice: {other}")))?,
            },
        }
        Ok(Flow::Continue)
    }

    async fn category_screen(&mut self, category: Category) -> Result<Flow> {
        let actions: Vec<ActionId> = category.actions().collect();
        loop {
            writeln!(self.out, "\n{}", color::header(category.label()))?;
            for line in category.info().lines() {
                writeln!(self.out, "{}", color::muted(line))?;
            }
            writeln!(self.out)?;
            for (n, action) in actions.iter().enumerate() {
                writeln!(self.out, "  {}) {}", color::literal(&(n + 1).to_string()), action.label())?;
            }
            writeln!(self.out, "  {}) Back", color::literal("b"))?;
            writeln!(self.out, "  {}) Quit", color::literal("q"))?;

            let Some(choice) = self.prompter.ask(&mut self.out, "> ").await? else {
                return Ok(Flow::Quit);
            };
            match choice.to_ascii_lowercase().as_str() {
                "b" => return Ok(Flow::Continue),
                "q" => return Ok(Flow::Quit),
                _ => {}
            }
            match pick(&actions, &choice) {
                Some(action) => {
                    if self.run_action(action).await? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                None => writeln!(self.out, "{}", color::error(&format!("Unknown choice: {choice}")))?,
            }
        }
    }

    async fn run_action(&mut self, action: ActionId) -> Result<Flow> {
        let target = match action.parameter().prompt() {
            None => None,
            Some(what) => match self.prompter.ask(&mut self.out, &format!("Enter {what}: ")).await? {
                None => return Ok(Flow::Quit),
                Some(answer) if answer.is_empty() => {
                    writeln!(self.out, "Cancelled.")?;
                    return Ok(Flow::Continue);
                }
                Some(answer) => Some(answer),
            },
        };

        let command = match self.catalog.command(action, target.as_deref()) {
            Ok(command) => command,
            Err(err) => {
                writeln!(self.out, "{}", color::error(&err.to_string()))?;
                return Ok(Flow::Continue);
            }
        };

        if ConfirmPolicy::decide(action.safety(), self.assume_yes, true) == ConfirmPolicy::Ask {
            if let Some(warning) = action.warning() {
                writeln!(self.out, "{}", color::error(warning))?;
            }
            let question = format!("Run `{command}`?");
            if !self.prompter.confirm(&mut self.out, &question).await? {
                writeln!(self.out, "Cancelled.")?;
                return Ok(Flow::Continue);
            }
        }

        self.session.execute(&command, &mut self.out).await?;
        Ok(Flow::Continue)
    }

    /// Starts a fresh transcript holding only the check's results.
    async fn internet_check(&mut self) -> Result<()> {
        self.session.clear();
        let commands = self.catalog.internet_check();
        self.session.execute_all(&commands, &mut self.out).await?;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        match report::save(self.session.transcript(), &self.report_dir, &self.clock) {
            Ok(path) => writeln!(self.out, "Report saved: {}", path.display())?,
            Err(ReportError::Empty) => writeln!(self.out, "Nothing to save.")?,
            Err(err) => writeln!(self.out, "{}", color::error(&err.to_string()))?,
        }
        Ok(())
    }
}

/// 1-based menu choice into `items`.
fn pick<T: Copy>(items: &[T], choice: &str) -> Option<T> {
    let n: usize = choice.parse().ok()?;
    items.get(n.checked_sub(1)?).copied()
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
