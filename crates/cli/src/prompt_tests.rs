// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn ask_trims_and_reports_eof() {
    let mut prompter = Prompter::new(&b"  example.com  \n"[..]);
    let mut out = Vec::new();

    let answer = prompter.ask(&mut out, "Host: ").await.unwrap();
    assert_eq!(answer.as_deref(), Some("example.com"));
    assert_eq!(String::from_utf8(out.clone()).unwrap(), "Host: ");

    assert_eq!(prompter.ask(&mut out, "Host: ").await.unwrap(), None);
}

#[yare::parameterized(
    y     = { "y\n", true },
    yes   = { "YES\n", true },
    no    = { "n\n", false },
    blank = { "\n", false },
    eof   = { "", false },
    other = { "sure\n", false },
)]
fn confirm_answers(input: &'static str, expected: bool) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut prompter = Prompter::new(input.as_bytes());
    let mut out = Vec::new();
    let answer = rt.block_on(prompter.confirm(&mut out, "Continue?")).unwrap();
    assert_eq!(answer, expected);
    assert_eq!(String::from_utf8(out).unwrap(), "Continue? [y/N] ");
}

#[yare::parameterized(
    read_only          = { Safety::ReadOnly, false, false, ConfirmPolicy::Skip },
    read_only_yes      = { Safety::ReadOnly, true, true, ConfirmPolicy::Skip },
    confirmable_yes    = { Safety::Confirmable, true, false, ConfirmPolicy::Assume },
    confirmable_tty    = { Safety::Confirmable, false, true, ConfirmPolicy::Ask },
    confirmable_script = { Safety::Confirmable, false, false, ConfirmPolicy::Refuse },
    mutating_script    = { Safety::Mutating, false, false, ConfirmPolicy::Refuse },
    mutating_yes       = { Safety::Mutating, true, true, ConfirmPolicy::Assume },
)]
fn policy(safety: Safety, assume_yes: bool, interactive: bool, expected: ConfirmPolicy) {
    assert_eq!(ConfirmPolicy::decide(safety, assume_yes, interactive), expected);
}
