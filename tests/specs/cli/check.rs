//! `netdiag check`: the combined internet connectivity check.

use crate::prelude::*;

#[test]
fn runs_every_step_in_order() {
    let project = Project::with_config(
        r#"
[commands]
show-ip = "echo step-ip"
ping = "echo step-ping {target}"
nslookup = "echo step-dns {target}"
"#,
    );
    let out = project.netdiag().args(&["check"]).passes();
    let ip = out.stdout.find("step-ip").unwrap();
    let ping = out.stdout.find("step-ping 8.8.8.8").unwrap();
    let dns = out.stdout.find("step-dns google.com").unwrap();
    assert!(ip < ping && ping < dns, "{}", out.stdout);
}

#[test]
fn keeps_going_after_a_failed_step() {
    let project = Project::with_config(
        r#"
[commands]
show-ip = "echo step-ip"
ping = "exit 1"
nslookup = "echo step-dns {target}"
"#,
    );
    project.netdiag().args(&["check"]).fails_with(1).stdout_has("step-dns google.com");
}
