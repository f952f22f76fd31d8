// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote tokenizer tests: single quotes, double quotes, escape sequences,
//! concatenation, and error cases.

use crate::lexer::Lexer;
use crate::lexer::LexerError;

// =============================================================================
// Single quotes
// =============================================================================

lex_tests! {
    single_quote_basic: "'hello'" => ["hello"],
    single_quote_preserves_internal_spacing: "echo 'hello   world'" => ["echo", "hello   world"],
    single_quote_preserves_tab: "'a\tb'" => ["a\tb"],

    // Backslash has no meaning inside single quotes
    single_quote_backslash_literal: r"'\b'" => [r"\b"],
    single_quote_backslash_n: r"'line\nbreak'" => [r"line\nbreak"],
    single_quote_double_backslash: r"'a\\b'" => [r"a\\b"],

    // Metacharacters are literal inside single quotes
    single_quote_preserves_pipe: "'a | b'" => ["a | b"],
    single_quote_preserves_redirect: "'a > b'" => ["a > b"],
    single_quote_preserves_double_quote: r#"'say "hi"'"# => [r#"say "hi""#],

    // Empty single quotes emit no token
    single_quote_empty: "''" => [],
    single_quote_empty_between_words: "echo '' x" => ["echo", "x"],
}

// =============================================================================
// Double quotes
// =============================================================================

lex_tests! {
    double_quote_basic: r#""hello""# => ["hello"],
    double_quote_with_spaces: r#""hello world""# => ["hello world"],
    double_quote_empty: r#""""# => [],

    // Only `\"` and `\\` are escapes
    double_quote_escape_quote: r#""a\"b""# => [r#"a"b"#],
    double_quote_escape_backslash: r#""a\\b""# => [r"a\b"],

    // Any other `\x` stays the two literal characters
    double_quote_backslash_n_literal: r#""a\nb""# => [r"a\nb"],
    double_quote_backslash_t_literal: r#""a\tb""# => [r"a\tb"],
    double_quote_backslash_x_literal: r#""\x""# => [r"\x"],

    // Metacharacters are literal inside double quotes
    double_quote_preserves_single_quote: r#""it's""# => ["it's"],
    double_quote_preserves_pipe: r#""a | b""# => ["a | b"],
    double_quote_preserves_redirect: r#""a > b""# => ["a > b"],
}

// =============================================================================
// Concatenation: adjacent runs join without a word break
// =============================================================================

lex_tests! {
    quoted_run_joins_unquoted: r#"a"b c"d"# => ["ab cd"],
    single_quote_between_words: "a'b'c" => ["abc"],
    adjacent_single_quotes: "'a''b''c'" => ["abc"],
    mixed_quote_styles: r#"'a'"b"'c'"# => ["abc"],
    empty_quotes_inside_word: "a''b" => ["ab"],
    quote_then_escape: r"'a'\ b" => ["a b"],
    word_boundary_still_splits: "'a' 'b'" => ["a", "b"],
}

// =============================================================================
// Error cases
// =============================================================================

lex_error_tests! {
    unterminated_single_immediate: "'" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_single_with_content: "'hello" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_single_after_word: "cmd 'arg" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double_immediate: "\"" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_with_content: "\"hello" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_trailing_backslash: "\"abc\\" => LexerError::UnterminatedDoubleQuote { .. },
}

// =============================================================================
// Error span accuracy
// =============================================================================

#[test]
fn error_span_starts_at_opening_quote() {
    let err = Lexer::tokenize("cmd 'arg").unwrap_err();
    match err {
        LexerError::UnterminatedSingleQuote { span } => {
            assert_eq!(span.start, 4, "span should start at the opening quote");
            assert_eq!(span.end, 8, "span should end at end of input");
        }
        other => panic!("expected UnterminatedSingleQuote, got {:?}", other),
    }
}

#[test]
fn double_quote_error_span() {
    let err = Lexer::tokenize("echo \"oops").unwrap_err();
    match err {
        LexerError::UnterminatedDoubleQuote { span } => {
            assert_eq!(span.start, 5);
            assert_eq!(span.end, 10);
        }
        other => panic!("expected UnterminatedDoubleQuote, got {:?}", other),
    }
}
