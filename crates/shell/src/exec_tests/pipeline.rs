// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for multi-stage pipelines.

use serial_test::serial;

use super::run;
use crate::exec::ExecOutcome;

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

#[tokio::test]
#[serial]
async fn builtin_feeds_external() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    run(&format!("echo a b c | cat 1> {}", file.display())).await.unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "a b c\n");
}

#[tokio::test]
#[serial]
async fn external_chain_counts_lines() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    run(&format!("printf 'x\\ny\\n' | wc -l 1> {}", file.display())).await.unwrap();
    let content = std::fs::read_to_string(&file).unwrap();
    assert_eq!(content.trim(), "2");
}

#[tokio::test]
#[serial]
async fn three_stages_pass_bytes_through() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    run(&format!("echo hello | cat | cat 1> {}", file.display())).await.unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello\n");
}

#[tokio::test]
#[serial]
async fn builtin_between_externals() {
    // The middle builtin ignores its predecessor and feeds its own output
    // to the successor.
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    run(&format!("sh -c 'echo upstream' | echo mid | cat 1> {}", file.display()))
        .await
        .unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "mid\n");
}

#[tokio::test]
#[serial]
async fn stage_redirect_overrides_pipe() {
    // A redirected stdout leaves the successor reading end-of-file.
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    run(&format!(
        "echo top 1> {} | cat 1> {}",
        first.display(),
        second.display()
    ))
    .await
    .unwrap();
    assert_eq!(std::fs::read_to_string(&first).unwrap(), "top\n");
    assert_eq!(std::fs::read_to_string(&second).unwrap(), "");
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[tokio::test]
#[serial]
async fn exit_in_pipeline_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    let outcome = run(&format!("exit | cat 1> {}", file.display())).await.unwrap();
    assert_eq!(outcome, ExecOutcome::Continue);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "");
}

#[tokio::test]
async fn exit_last_does_not_terminate() {
    let outcome = run("echo hi | exit").await.unwrap();
    assert_eq!(outcome, ExecOutcome::Continue);
}

#[tokio::test]
#[serial]
async fn not_found_stage_contributes_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    let outcome = run(&format!(
        "definitely-not-a-command-xyzzy | cat 1> {}",
        file.display()
    ))
    .await
    .unwrap();
    assert_eq!(outcome, ExecOutcome::Continue);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "");
}

#[tokio::test]
async fn empty_stage_aborts_before_launch() {
    // `echo a | | cat 1> f` has a zero-token middle stage: the pipeline is
    // abandoned before any redirection target is created.
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    let outcome = run(&format!("echo a | | cat 1> {}", file.display())).await.unwrap();
    assert_eq!(outcome, ExecOutcome::Continue);
    assert!(!file.exists());
}

#[tokio::test]
async fn quoted_pipe_is_data_not_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    run(&format!("echo 'a | b' 1> {}", file.display())).await.unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "a | b\n");
}
