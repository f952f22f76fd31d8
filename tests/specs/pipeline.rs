//! Pipeline scenarios through the full shell.

use crate::prelude::*;

#[test]
fn builtin_pipes_into_external() {
    session()
        .line("echo a b c | cat")
        .run()
        .succeeds()
        .stdout_has("a b c\n");
}

#[test]
fn external_pipeline_counts_entries() {
    // Three visible entries, counted through `ls | wc -l`.
    let dir = tempfile::tempdir().unwrap();
    for name in ["one.txt", "two.txt", "three.txt"] {
        std::fs::write(dir.path().join(name), "x\n").unwrap();
    }
    session()
        .cwd(dir.path())
        .line("ls | wc -l")
        .run()
        .succeeds()
        .stdout_has("3");
}

#[test]
fn three_stage_pipeline() {
    session()
        .line("echo deep | cat | cat")
        .run()
        .succeeds()
        .stdout_has("deep\n");
}

#[test]
fn quoted_pipe_is_not_a_pipeline() {
    session()
        .line("echo 'a | b'")
        .run()
        .succeeds()
        .stdout_has("a | b\n");
}

#[test]
fn exit_inside_a_pipeline_does_not_terminate() {
    session()
        .line("exit | cat")
        .line("echo survived")
        .run()
        .succeeds()
        .stdout_has("survived\n");
}

#[test]
fn empty_stage_aborts_the_pipeline_silently() {
    session()
        .line("echo a | | cat")
        .line("echo next")
        .run()
        .succeeds()
        .stdout_lacks("a\n")
        .stdout_has("next\n");
}
