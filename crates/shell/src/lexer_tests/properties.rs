// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for tokenizer invariants.

use proptest::prelude::*;

use crate::lexer::Lexer;
use crate::splitter::split_pipeline;

/// Strategy for plain words with no shell metacharacters.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./-]{1,12}".prop_map(String::from)
}

proptest! {
    /// Invariant: every emitted token is non-empty.
    #[test]
    fn tokens_are_never_empty(input in "[ -~]{0,120}") {
        if let Ok(stage) = Lexer::tokenize(&input) {
            for token in &stage.tokens {
                prop_assert!(!token.is_empty(), "empty token for input {:?}", input);
            }
        }
    }

    /// Invariant: the tokenizer never panics on arbitrary ASCII input.
    #[test]
    fn tokenizer_never_panics(input in "[ -~\\t]{0,200}") {
        let _ = Lexer::tokenize(&input);
    }

    /// Invariant: the tokenizer never panics on mixed Unicode input.
    #[test]
    fn tokenizer_handles_unicode(input in "[a-z'\"\\\\日本語 ]{0,60}") {
        let _ = Lexer::tokenize(&input);
    }

    /// Plain words joined by single spaces tokenize back to themselves.
    #[test]
    fn plain_words_round_trip(words in prop::collection::vec(word_strategy(), 1..8)) {
        let input = words.join(" ");
        let stage = Lexer::tokenize(&input).expect("plain words must tokenize");
        prop_assert_eq!(stage.tokens, words);
    }

    /// Single-quoting makes any quote-free content one literal token.
    #[test]
    fn single_quoted_content_is_literal(content in "[ -&(-~]{1,40}") {
        // Character class excludes the single quote itself.
        let input = format!("'{}'", content);
        let stage = Lexer::tokenize(&input).expect("quoted content must tokenize");
        prop_assert_eq!(stage.tokens.len(), 1);
        prop_assert_eq!(&stage.tokens[0], &content);
    }

    /// With several stdout directives, the last target wins.
    #[test]
    fn last_stdout_directive_wins(targets in prop::collection::vec(word_strategy(), 1..5)) {
        let directives: Vec<String> =
            targets.iter().map(|t| format!("> {}", t)).collect();
        let input = format!("cmd {}", directives.join(" "));
        let stage = Lexer::tokenize(&input).expect("directives must tokenize");
        let stdout = stage.redirs.stdout.expect("stdout redirect recorded");
        prop_assert_eq!(Some(&stdout.target), targets.last());
    }

    /// Error spans stay within the input bounds.
    #[test]
    fn error_spans_are_in_bounds(input in "[ -~]{0,100}") {
        if let Err(err) = Lexer::tokenize(&input) {
            let span = err.span();
            prop_assert!(span.start <= input.len());
            prop_assert!(span.end <= input.len());
            prop_assert!(span.start <= span.end);
        }
    }

    /// The splitter never panics and splitting is stable for quote-free
    /// pipe-free text.
    #[test]
    fn splitter_never_panics(input in "[ -~]{0,150}") {
        let _ = split_pipeline(&input);
    }

    /// Quote-free, pipe-free lines come back as one trimmed stage.
    #[test]
    fn pipe_free_line_is_one_stage(words in prop::collection::vec(word_strategy(), 1..6)) {
        let line = words.join(" ");
        let parts = split_pipeline(&line);
        prop_assert_eq!(parts, vec![line]);
    }
}
