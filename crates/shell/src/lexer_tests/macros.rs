// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for tokenizer tests.
//!
//! These macros reduce boilerplate by providing declarative test
//! generation.

/// Generate tokenization success tests asserting the produced words.
///
/// # Usage
///
/// ```ignore
/// lex_tests! {
///     name: "input" => ["token1", "token2"],
/// }
/// ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let stage = Lexer::tokenize($input)
                    .expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<&str> = vec![$($token),*];
                assert_eq!(stage.tokens, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate tokenization error tests.
///
/// # Usage
///
/// ```ignore
/// lex_error_tests! {
///     name: "input" => LexerError::UnterminatedSingleQuote { .. },
/// }
/// ```
macro_rules! lex_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Lexer::tokenize($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

// Macros are exported via #[macro_use] in mod.rs
