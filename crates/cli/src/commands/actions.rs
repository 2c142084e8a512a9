// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `netdiag actions` - List the command catalog

use anyhow::Result;
use netdiag_core::{ActionId, Catalog, Category, Safety};
use serde::Serialize;

use crate::app::App;
use crate::color;
use crate::output::OutputFormat;

#[derive(Serialize)]
struct ActionEntry<'a> {
    action: &'static str,
    label: &'static str,
    category: &'static str,
    safety: &'static str,
    target: Option<&'static str>,
    command: &'a str,
}

fn entries(catalog: &Catalog) -> Vec<ActionEntry<'_>> {
    ActionId::ALL
        .iter()
        .map(|&id| ActionEntry {
            action: id.as_str(),
            label: id.label(),
            category: id.category().as_str(),
            safety: id.safety().as_str(),
            target: id.parameter().prompt(),
            command: catalog.template(id),
        })
        .collect()
}

pub fn handle(app: &App) -> Result<()> {
    match app.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries(&app.catalog))?);
        }
        OutputFormat::Text => print!("{}", render_text(&app.catalog)),
    }
    Ok(())
}

fn render_text(catalog: &Catalog) -> String {
    let mut text = String::new();
    for &category in Category::ALL {
        text.push_str(&format!("{}\n", color::header(category.label())));
        for line in category.info().lines().filter(|l| !l.is_empty()) {
            text.push_str(&format!("  {}\n", color::muted(line)));
        }
        for action in category.actions() {
            let marker = match action.safety() {
                Safety::ReadOnly => "",
                Safety::Confirmable => " (confirm)",
                Safety::Mutating => " (mutating)",
            };
            text.push_str(&format!(
                "  {:<14} {:<18} {}{}\n",
                color::literal(action.as_str()),
                action.label(),
                color::context(catalog.template(action)),
                color::error(marker),
            ));
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
