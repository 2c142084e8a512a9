//! `--save`: timestamped plain-text reports.

use crate::prelude::*;

#[test]
fn save_writes_report_to_report_dir() {
    let project = Project::with_config("[commands]\nhostname = \"echo myhost\"\n");
    let out = project
        .netdiag()
        .args(&["--report-dir", "reports", "run", "hostname", "--save"])
        .passes()
        .stderr_has("Report saved:");

    let files = project.files_in("reports");
    assert_eq!(files.len(), 1, "{}", out.stderr);
    assert!(files[0].starts_with("netdiag_report_") && files[0].ends_with(".txt"));
    assert_eq!(project.read(&format!("reports/{}", files[0])), "> echo myhost\nmyhost");
}

#[test]
fn report_dir_from_config() {
    let project = Project::with_config("report_dir = \"out\"\n");
    project.netdiag().args(&["exec", "--save", "echo saved"]).passes();
    assert_eq!(project.files_in("out").len(), 1);
}

#[test]
fn report_dir_from_environment() {
    let project = Project::empty();
    let dir = project.path().join("env-reports");
    project.netdiag().env("NETDIAG_REPORT_DIR", &dir).args(&["exec", "--save", "echo saved"]).passes();
    assert_eq!(project.files_in("env-reports").len(), 1);
}

#[cfg(unix)]
#[test]
fn failed_command_is_still_saved() {
    let project = Project::empty();
    project.netdiag().args(&["--report-dir", "r", "exec", "--save", "echo before; exit 1"]).fails_with(1);
    let files = project.files_in("r");
    assert_eq!(files.len(), 1);
    assert!(project.read(&format!("r/{}", files[0])).contains("before"));
}

#[test]
fn without_save_nothing_is_written() {
    let project = Project::empty();
    project.netdiag().args(&["--report-dir", "r", "exec", "echo hi"]).passes();
    assert!(project.files_in("r").is_empty());
}
