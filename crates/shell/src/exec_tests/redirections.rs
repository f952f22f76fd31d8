// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for redirection file handling.

use serial_test::serial;

use super::run;
use crate::exec::ExecOutcome;

// ---------------------------------------------------------------------------
// Last directive per stream wins
// ---------------------------------------------------------------------------

#[tokio::test]
async fn last_stdout_directive_wins() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");

    run(&format!("echo x 1> {} 1> {}", first.display(), second.display()))
        .await
        .unwrap();
    assert_eq!(std::fs::read_to_string(&second).unwrap(), "x\n");
    // The overridden target is never recorded, so it is never created.
    assert!(!first.exists());
}

#[tokio::test]
#[serial]
async fn streams_keep_independent_targets() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let err = dir.path().join("err.txt");

    run(&format!(
        "sh -c 'echo o; echo e >&2' 2> {} 1> {}",
        err.display(),
        out.display()
    ))
    .await
    .unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "o\n");
    assert_eq!(std::fs::read_to_string(&err).unwrap(), "e\n");
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

async fn run_stderr_pair(op: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("err.txt");

    run(&format!("sh -c 'echo e1 >&2' 2> {}", file.display())).await.unwrap();
    run(&format!("sh -c 'echo e2 >&2' {} {}", op, file.display())).await.unwrap();
    std::fs::read_to_string(&file).unwrap()
}

#[tokio::test]
#[serial]
async fn stderr_truncate_replaces() {
    assert_eq!(run_stderr_pair("2>").await, "e2\n");
}

#[tokio::test]
#[serial]
async fn stderr_append_accumulates() {
    assert_eq!(run_stderr_pair("2>>").await, "e1\ne2\n");
}

#[tokio::test]
async fn append_positions_at_end_of_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");
    std::fs::write(&file, "seed\n").unwrap();

    run(&format!("echo more >> {}", file.display())).await.unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "seed\nmore\n");
}

// ---------------------------------------------------------------------------
// Open failures fall back to the shell's stream
// ---------------------------------------------------------------------------

#[tokio::test]
async fn open_failure_still_executes_stage() {
    let outcome = run("echo hi 1> /definitely/not/a/writable/path.txt").await.unwrap();
    assert_eq!(outcome, ExecOutcome::Continue);
}

#[tokio::test]
async fn quoted_target_may_contain_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("my file.txt");

    run(&format!("echo spaced 1> '{}'", file.display())).await.unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "spaced\n");
}
