//! Redirection scenarios through the full shell.

use crate::prelude::*;

#[test]
fn redirect_creates_file_and_silences_terminal() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .cwd(dir.path())
        .line("echo out 1> f.txt")
        .run()
        .succeeds()
        .stdout_lacks("out");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("f.txt")).unwrap(),
        "out\n"
    );
}

#[test]
fn truncation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .cwd(dir.path())
        .line("echo X > f.txt")
        .line("echo X > f.txt")
        .run()
        .succeeds();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("f.txt")).unwrap(),
        "X\n"
    );
}

#[test]
fn append_accumulates_across_commands() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .cwd(dir.path())
        .line("echo X >> f.txt")
        .line("echo X >> f.txt")
        .line("echo X >> f.txt")
        .run()
        .succeeds();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("f.txt")).unwrap(),
        "X\nX\nX\n"
    );
}

#[test]
fn stderr_redirect_of_external() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .cwd(dir.path())
        .line("sh -c 'echo oops >&2' 2> err.txt")
        .run()
        .succeeds();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("err.txt")).unwrap(),
        "oops\n"
    );
}

#[test]
fn last_directive_wins() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .cwd(dir.path())
        .line("echo x 1> a.txt 1> b.txt")
        .run()
        .succeeds();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("b.txt")).unwrap(),
        "x\n"
    );
    assert!(!dir.path().join("a.txt").exists());
}

#[test]
fn quoted_target_with_spaces() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .cwd(dir.path())
        .line("echo spaced > 'my file.txt'")
        .run()
        .succeeds();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("my file.txt")).unwrap(),
        "spaced\n"
    );
}

#[test]
fn open_failure_reports_and_falls_back() {
    session()
        .line("echo hi 1> /definitely/not/a/writable/path.txt")
        .run()
        .succeeds()
        .stdout_has("err: can not open file:")
        // The stage still ran, with stdout falling back to the terminal.
        .stdout_has("hi\n");
}

#[test]
fn redirected_stage_inside_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    session()
        .cwd(dir.path())
        .line("echo a b c | cat 1> piped.txt")
        .run()
        .succeeds()
        .stdout_lacks("a b c");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("piped.txt")).unwrap(),
        "a b c\n"
    );
}
