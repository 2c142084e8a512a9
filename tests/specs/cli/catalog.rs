//! `netdiag platform` and `netdiag actions`.

use crate::prelude::*;

#[test]
fn platform_reports_host_profile() {
    cli().args(&["platform"]).passes().stdout_has("Detected system:").stdout_has("Encoding:");
}

#[test]
fn platform_json_honours_encoding_override() {
    let project = Project::with_config("encoding = \"cp850\"\ntimeout_secs = 15\n");
    let json = project.netdiag().args(&["--format", "json", "platform"]).passes().json();
    assert_eq!(json["encoding"], "cp850");
    assert_eq!(json["timeout_secs"], 15.0);
}

#[test]
fn bad_encoding_label_is_rejected() {
    let project = Project::with_config("encoding = \"klingon\"\n");
    project.netdiag().args(&["platform"]).fails_with(2).stderr_has("klingon");
}

#[test]
fn actions_lists_every_action() {
    cli()
        .args(&["actions"])
        .passes()
        .stdout_has("show-ip")
        .stdout_has("arp-flush")
        .stdout_has("(confirm)")
        .stdout_has("service-stop")
        .stdout_has("(mutating)");
}

#[test]
fn actions_json_shows_overrides() {
    let project = Project::with_config("[commands]\nhostname = \"echo myhost\"\n");
    let json = project.netdiag().args(&["--format", "json", "actions"]).passes().json();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 14);
    let hostname = entries.iter().find(|e| e["action"] == "hostname").unwrap();
    assert_eq!(hostname["command"], "echo myhost");
    assert_eq!(hostname["safety"], "read-only");
    let ping = entries.iter().find(|e| e["action"] == "ping").unwrap();
    assert_eq!(ping["target"], "IP or domain");
}
