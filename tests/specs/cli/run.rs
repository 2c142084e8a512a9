//! `netdiag run`: catalog actions, targets, and confirmation.

use crate::prelude::*;

const CONFIG: &str = r#"
[commands]
hostname = "echo myhost"
ping = "echo pinging {target}"
arp-flush = "echo flushed"
service-stop = "echo stopping {target}"
"#;

#[test]
fn runs_overridden_action() {
    let project = Project::with_config(CONFIG);
    project.netdiag().args(&["run", "hostname"]).passes().stdout_has("> echo myhost").stdout_has("myhost");
}

#[test]
fn substitutes_trimmed_target() {
    let project = Project::with_config(CONFIG);
    project
        .netdiag()
        .args(&["run", "ping", "  example.com  "])
        .passes()
        .stdout_has("pinging example.com");
}

#[test]
fn action_names_accept_underscores_and_case() {
    let project = Project::with_config(CONFIG);
    project.netdiag().args(&["run", "HOSTNAME"]).passes().stdout_has("myhost");
}

#[test]
fn missing_target_is_usage_error() {
    let project = Project::with_config(CONFIG);
    project
        .netdiag()
        .args(&["run", "ping"])
        .fails_with(2)
        .stderr_has("needs a IP or domain")
        .stdout_lacks("pinging");
}

#[test]
fn unexpected_target_is_usage_error() {
    let project = Project::with_config(CONFIG);
    project.netdiag().args(&["run", "hostname", "box"]).fails_with(2).stderr_has("does not take a target");
}

#[test]
fn unknown_action_is_usage_error() {
    cli().args(&["run", "teleport"]).fails_with(2).stderr_has("unknown action `teleport`");
}

#[test]
fn confirmable_action_without_tty_is_refused() {
    let project = Project::with_config(CONFIG);
    project
        .netdiag()
        .args(&["run", "arp-flush"])
        .fails_with(2)
        .stderr_has("needs confirmation")
        .stdout_lacks("flushed");
}

#[test]
fn yes_runs_confirmable_action() {
    let project = Project::with_config(CONFIG);
    project.netdiag().args(&["--yes", "run", "arp-flush"]).passes().stdout_has("flushed");
}

#[test]
fn yes_runs_mutating_action() {
    let project = Project::with_config(CONFIG);
    project.netdiag().args(&["run", "service-stop", "cups", "-y"]).passes().stdout_has("stopping cups");
}

#[test]
fn failing_action_exits_one() {
    let project = Project::with_config("[commands]\nhostname = \"exit 4\"\n");
    project.netdiag().args(&["run", "hostname"]).fails_with(1).stdout_has("[exit 4]");
}

#[test]
fn unknown_override_key_is_rejected() {
    let project = Project::with_config("[commands]\nteleport = \"echo hi\"\n");
    project.netdiag().args(&["run", "hostname"]).fails_with(2).stderr_has("teleport");
}

#[test]
fn unknown_config_field_is_rejected() {
    let project = Project::with_config("colour = true\n");
    project.netdiag().args(&["platform"]).fails_with(2).stderr_has("invalid config");
}

#[test]
fn explicit_config_must_exist() {
    cli().args(&["--config", "/nonexistent/netdiag.toml", "platform"]).fails_with(2).stderr_has("config");
}
