//! Help and usage output.

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("platform")
        .stdout_has("actions")
        .stdout_has("exec")
        .stdout_has("check")
        .stdout_has("menu");
}

#[test]
fn run_help_shows_usage() {
    cli().args(&["run", "--help"]).passes().stdout_has("Usage:");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cli().args(&["teleport"]).fails_with(2);
}

#[test]
fn exec_requires_a_command() {
    cli().args(&["exec"]).fails_with(2);
}
