// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic tokenizer tests: words, whitespace, unquoted escapes.

use crate::lexer::Lexer;

// =============================================================================
// Words and whitespace
// =============================================================================

lex_tests! {
    empty_input: "" => [],
    only_spaces: "   " => [],
    only_tabs: "\t\t" => [],
    single_word: "echo" => ["echo"],
    two_words: "echo hello" => ["echo", "hello"],
    many_words: "ls -l -a /tmp" => ["ls", "-l", "-a", "/tmp"],

    // Repeated whitespace collapses; no empty tokens
    repeated_spaces: "echo   hello" => ["echo", "hello"],
    mixed_whitespace: "echo \t hello \t world" => ["echo", "hello", "world"],
    leading_whitespace: "   echo hi" => ["echo", "hi"],
    trailing_whitespace: "echo hi   " => ["echo", "hi"],

    // Bytes with no shell meaning are literal
    punctuation_word: "a-b_c.d/e:f" => ["a-b_c.d/e:f"],
    unicode_word: "héllo 世界" => ["héllo", "世界"],
}

// =============================================================================
// Unquoted escapes
// =============================================================================

lex_tests! {
    // `\x` appends the next character literally, whatever it is
    escaped_space_joins_words: r"a\ b" => ["a b"],
    escaped_dollar: r"\$HOME" => ["$HOME"],
    escaped_backslash: r"a\\b" => [r"a\b"],
    escaped_quote_is_literal: r"ab\'cd" => ["ab'cd"],
    escaped_double_quote_is_literal: r#"ab\"cd"# => [r#"ab"cd"#],
    escaped_pipe_char: r"a\|b" => ["a|b"],
    escaped_gt_is_not_a_redirect: r"a\>b" => ["a>b"],
    escaped_ordinary_char: r"\e\c\h\o" => ["echo"],

    // A trailing lone backslash is dropped
    trailing_backslash_dropped: "abc\\" => ["abc"],
    lone_backslash_is_nothing: "\\" => [],
    escaped_space_then_eof: r"a\ " => ["a "],
}

// =============================================================================
// End-to-end shapes from typical sessions
// =============================================================================

lex_tests! {
    command_with_flag_arg: "grep -n main src/lib.rs" => ["grep", "-n", "main", "src/lib.rs"],
    mixed_escape_styles: r#"echo "a\"b" \$ \\"# => ["echo", r#"a"b"#, "$", r"\"],
}
