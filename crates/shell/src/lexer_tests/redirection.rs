// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection directive tests: operator recognition, fd prefixes, target
//! reading, and last-wins behavior.

use crate::lexer::Lexer;
use crate::stage::{OutputRedirect, RedirMode, Stage};

fn lex(input: &str) -> Stage {
    Lexer::tokenize(input).expect("input must tokenize")
}

fn redirect(mode: RedirMode, target: &str) -> Option<OutputRedirect> {
    Some(OutputRedirect::new(mode, target))
}

// ---------------------------------------------------------------------------
// Operator forms
// ---------------------------------------------------------------------------

#[yare::parameterized(
    plain = { "echo hi > f", RedirMode::Truncate },
    append = { "echo hi >> f", RedirMode::Append },
    fd1 = { "echo hi 1> f", RedirMode::Truncate },
    fd1_append = { "echo hi 1>> f", RedirMode::Append },
)]
fn stdout_operators(input: &str, mode: RedirMode) {
    let stage = lex(input);
    assert_eq!(stage.tokens, ["echo", "hi"]);
    assert_eq!(stage.redirs.stdout, redirect(mode, "f"));
    assert_eq!(stage.redirs.stderr, None);
}

#[yare::parameterized(
    fd2 = { "cmd 2> f", RedirMode::Truncate },
    fd2_append = { "cmd 2>> f", RedirMode::Append },
)]
fn stderr_operators(input: &str, mode: RedirMode) {
    let stage = lex(input);
    assert_eq!(stage.tokens, ["cmd"]);
    assert_eq!(stage.redirs.stderr, redirect(mode, "f"));
    assert_eq!(stage.redirs.stdout, None);
}

#[test]
fn no_space_around_operator() {
    let stage = lex("echo hi>f");
    assert_eq!(stage.tokens, ["echo", "hi"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "f"));
}

#[test]
fn tabs_after_operator_are_skipped() {
    let stage = lex("echo > \t f");
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "f"));
}

// ---------------------------------------------------------------------------
// File-descriptor prefixes
// ---------------------------------------------------------------------------

#[test]
fn bare_digit_before_operator_is_an_fd() {
    let stage = lex("cmd 2> err.txt");
    assert_eq!(stage.tokens, ["cmd"]);
    assert_eq!(stage.redirs.stderr, redirect(RedirMode::Truncate, "err.txt"));
}

#[test]
fn digit_argument_with_space_is_a_word() {
    // `echo 2 > f` writes the word `2`; the operator defaults to stdout.
    let stage = lex("echo 2 > f");
    assert_eq!(stage.tokens, ["echo", "2"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "f"));
    assert_eq!(stage.redirs.stderr, None);
}

#[test]
fn digit_inside_word_is_not_an_fd() {
    let stage = lex("a1> f");
    assert_eq!(stage.tokens, ["a1"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "f"));
}

#[test]
fn quoted_digit_is_a_word() {
    let stage = lex("echo '2'> f");
    assert_eq!(stage.tokens, ["echo", "2"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "f"));
}

#[test]
fn fd_three_is_a_word() {
    // Only fd 1 and fd 2 are recognized as prefixes.
    let stage = lex("cmd 3> f");
    assert_eq!(stage.tokens, ["cmd", "3"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "f"));
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

#[test]
fn single_quoted_target_keeps_spaces() {
    let stage = lex("echo hi > 'my file.txt'");
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "my file.txt"));
}

#[test]
fn double_quoted_target_keeps_spaces() {
    let stage = lex(r#"echo hi > "my file.txt""#);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "my file.txt"));
}

#[test]
fn escaped_space_in_target() {
    let stage = lex(r"echo hi > my\ file");
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "my file"));
}

#[test]
fn partially_quoted_target_concatenates() {
    let stage = lex("echo > out'put'.txt");
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "output.txt"));
}

#[test]
fn missing_target_is_recorded_empty() {
    // Fails later at open time; tokenization succeeds.
    let stage = lex("echo x >");
    assert_eq!(stage.tokens, ["echo", "x"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, ""));
}

// ---------------------------------------------------------------------------
// Multiple directives
// ---------------------------------------------------------------------------

#[test]
fn last_directive_per_fd_wins() {
    let stage = lex("echo a > x > y");
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "y"));
}

#[test]
fn last_wins_tracks_mode_too() {
    let stage = lex("cmd 2> x 2>> y");
    assert_eq!(stage.redirs.stderr, redirect(RedirMode::Append, "y"));
}

#[test]
fn streams_are_independent() {
    let stage = lex("cmd 1> out 2> err");
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "out"));
    assert_eq!(stage.redirs.stderr, redirect(RedirMode::Truncate, "err"));
}

#[test]
fn arguments_after_a_target_are_kept() {
    let stage = lex("echo a > f b c");
    assert_eq!(stage.tokens, ["echo", "a", "b", "c"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "f"));
}

#[test]
fn adjacent_directives_without_spaces() {
    // The target ends at the next `>`, which opens a new directive.
    let stage = lex("echo >a>b");
    assert_eq!(stage.tokens, ["echo"]);
    assert_eq!(stage.redirs.stdout, redirect(RedirMode::Truncate, "b"));
}

// ---------------------------------------------------------------------------
// Quoting shields the operator
// ---------------------------------------------------------------------------

#[test]
fn quoted_gt_is_data() {
    let stage = lex("echo 'a > b'");
    assert_eq!(stage.tokens, ["echo", "a > b"]);
    assert!(stage.redirs.is_empty());
}

#[test]
fn escaped_gt_is_data() {
    let stage = lex(r"echo a\>b");
    assert_eq!(stage.tokens, ["echo", "a>b"]);
    assert!(stage.redirs.is_empty());
}
