// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the single-stage fast path.

use serial_test::serial;

use super::run;
use crate::exec::{ExecError, ExecOutcome};

// ---------------------------------------------------------------------------
// Builtins with redirections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_redirect_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    let outcome = run(&format!("echo out 1> {}", file.display())).await.unwrap();
    assert_eq!(outcome, ExecOutcome::Continue);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "out\n");
}

#[tokio::test]
async fn truncation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");
    let line = format!("echo X > {}", file.display());

    run(&line).await.unwrap();
    run(&line).await.unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "X\n");
}

#[tokio::test]
async fn append_accumulates() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");
    let line = format!("echo X >> {}", file.display());

    for _ in 0..3 {
        run(&line).await.unwrap();
    }
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "X\nX\nX\n");
}

#[tokio::test]
async fn stderr_target_created_even_for_builtins() {
    // Builtins never write stderr, but the 2> target is still opened.
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let err = dir.path().join("err.txt");

    run(&format!("echo hi 1> {} 2> {}", out.display(), err.display()))
        .await
        .unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "hi\n");
    assert_eq!(std::fs::read_to_string(&err).unwrap(), "");
}

// ---------------------------------------------------------------------------
// Externals
// ---------------------------------------------------------------------------

#[tokio::test]
#[serial]
async fn external_with_split_streams() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let err = dir.path().join("err.txt");

    run(&format!(
        "sh -c 'echo hi; echo oops >&2' 1> {} 2> {}",
        out.display(),
        err.display()
    ))
    .await
    .unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "hi\n");
    assert_eq!(std::fs::read_to_string(&err).unwrap(), "oops\n");
}

#[tokio::test]
async fn command_not_found_is_returned() {
    let err = run("definitely-not-a-command-xyzzy").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "definitely-not-a-command-xyzzy: command not found"
    );
}

#[tokio::test]
async fn not_found_does_not_open_redirect_target() {
    // Resolution precedes file opening, so no file appears.
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");

    let result = run(&format!("definitely-not-a-command-xyzzy 1> {}", file.display())).await;
    assert!(matches!(result, Err(ExecError::CommandNotFound { .. })));
    assert!(!file.exists());
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

#[yare::parameterized(
    bare = { "exit" },
    with_status = { "exit 5" },
    with_junk = { "exit now please" },
)]
fn exit_terminates_ignoring_args(line: &str) {
    let outcome = tokio::runtime::Runtime::new()
        .unwrap()
        .block_on(run(line))
        .unwrap();
    assert_eq!(outcome, ExecOutcome::Exit);
}

// ---------------------------------------------------------------------------
// Degenerate stages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_stage_is_skipped() {
    let outcome = run("''").await.unwrap();
    assert_eq!(outcome, ExecOutcome::Continue);
}
