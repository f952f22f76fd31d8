// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level pipeline splitting.
//!
//! Runs before tokenization: the raw line is split at every `|` that sits
//! outside quotes, and each stage substring (quotes still intact) goes to
//! the tokenizer separately. Only quote state is tracked here; backslash is
//! not an escape at this level, so an unquoted `\|` still splits.

/// Quote state while scanning a raw line.
#[derive(Default)]
struct QuoteState {
    in_single: bool,
    in_double: bool,
}

impl QuoteState {
    /// Update state for one character.
    fn process(&mut self, ch: char) {
        match ch {
            '\'' if !self.in_double => self.in_single = !self.in_single,
            '"' if !self.in_single => self.in_double = !self.in_double,
            _ => {}
        }
    }

    fn quoted(&self) -> bool {
        self.in_single || self.in_double
    }
}

/// Split a line at top-level `|` into trimmed stage substrings.
///
/// A trailing segment is kept only when non-empty before trimming: `a |`
/// yields one stage, while `a | ` yields a second, empty stage (which later
/// aborts the pipeline).
pub fn split_pipeline(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::default();

    for ch in line.chars() {
        if ch == '|' && !state.quoted() {
            parts.push(current.trim().to_string());
            current.clear();
            continue;
        }
        state.process(ch);
        current.push(ch);
    }

    if !current.is_empty() {
        parts.push(current.trim().to_string());
    }

    parts
}

#[cfg(test)]
#[path = "splitter_tests.rs"]
mod tests;
