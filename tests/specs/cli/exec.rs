//! `netdiag exec`: raw command lines through the host shell.

use crate::prelude::*;

#[test]
fn echoes_command_and_prints_output() {
    cli().args(&["exec", "echo", "hello"]).passes().stdout_has("> echo hello").stdout_has("hello");
}

#[test]
fn stderr_is_merged_into_output() {
    cli().args(&["exec", "echo oops 1>&2"]).passes().stdout_has("oops");
}

#[test]
fn non_zero_exit_fails_with_one() {
    cli().args(&["exec", "exit 3"]).fails_with(1).stdout_has("[exit 3]");
}

#[cfg(unix)]
#[test]
fn output_before_failure_is_kept() {
    cli()
        .args(&["exec", "echo partial; exit 2"])
        .fails_with(1)
        .stdout_has("partial")
        .stdout_has("[exit 2]");
}

#[test]
fn missing_program_is_a_startup_failure() {
    cli()
        .args(&["exec", "netdiag-no-such-program-xyz"])
        .fails_with(127)
        .stdout_has("[error] command not found");
}

#[test]
fn hyphen_arguments_pass_through() {
    cli().args(&["exec", "echo", "-n", "x"]).passes().stdout_has("> echo -n x");
}

#[test]
fn json_result_reports_status() {
    let out = cli().args(&["--format", "json", "exec", "echo hi"]).passes();
    let results = out.json_lines();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["command"], "echo hi");
    assert_eq!(results[0]["succeeded"], true);
    assert_eq!(results[0]["exit_code"], 0);
    assert!(results[0]["output_text"].as_str().unwrap().contains("hi"));
}

#[test]
fn json_startup_failure_has_kind() {
    let out = cli().args(&["--format", "json", "exec", "netdiag-no-such-program-xyz"]).fails_with(127);
    let results = out.json_lines();
    assert_eq!(results[0]["kind"], "not_found");
}

#[cfg(unix)]
#[test]
fn timeout_flag_kills_slow_commands() {
    cli()
        .args(&["--timeout", "1", "exec", "echo started; sleep 30"])
        .fails_with(1)
        .stdout_has("started")
        .stdout_has("[timed out after ");
}

#[cfg(unix)]
#[test]
fn timeout_from_environment() {
    cli()
        .env("NETDIAG_TIMEOUT_MS", "300")
        .args(&["exec", "sleep 30"])
        .fails_with(1)
        .stdout_has("timed out");
}

#[cfg(unix)]
#[test]
fn program_exiting_127_is_a_failed_command() {
    cli().args(&["exec", "echo ran; exit 127"]).fails_with(1).stdout_has("ran").stdout_has("[exit 127]");
}

#[cfg(unix)]
#[test]
fn config_env_reaches_commands() {
    let project = Project::with_config("[env]\nND_GREETING = \"from-config\"\n");
    project.netdiag().args(&["exec", "echo $ND_GREETING"]).passes().stdout_has("from-config");
}
