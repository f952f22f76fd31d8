// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection directive recognition and target reading.

use super::{Lexer, LexerError};
use crate::stage::{OutputRedirect, RedirFd, RedirMode};

impl Lexer<'_> {
    /// Recognize one redirection directive and its target.
    ///
    /// Called with the scanner positioned on `>`. Operators are matched in
    /// priority order: `1>>` / `2>>`, then `>>`, then `1>` / `2>`, then `>`.
    /// Recording replaces any earlier directive for the same stream, so the
    /// last one per fd wins; scanning continues after the target.
    pub(super) fn lex_redirect(&mut self) -> Result<(), LexerError> {
        let fd = self.take_fd_prefix();

        self.chars.next(); // consume >
        let mode = if self.peek_char() == Some('>') {
            self.chars.next();
            RedirMode::Append
        } else {
            RedirMode::Truncate
        };

        let target = self.read_target()?;
        self.redirs.set(fd, OutputRedirect::new(mode, target));
        Ok(())
    }

    /// Interpret the in-progress word as a file-descriptor prefix.
    ///
    /// Only a bare unquoted `1` or `2` counts; anything else (including a
    /// quoted digit) flushes as an ordinary token and the operator applies
    /// to stdout, so `a1> f` redirects fd 1 for command word `a1`.
    fn take_fd_prefix(&mut self) -> RedirFd {
        if !self.buf_quoted {
            match self.buf.as_str() {
                "1" => {
                    self.buf.clear();
                    return RedirFd::Stdout;
                }
                "2" => {
                    self.buf.clear();
                    return RedirFd::Stderr;
                }
                _ => {}
            }
        }
        self.flush();
        RedirFd::Stdout
    }

    /// Read the target path after the operator.
    ///
    /// ASCII space/tab are skipped, then one quote-processed word is read,
    /// terminated by unquoted whitespace, a following `>`, or end of input.
    /// An empty target is returned as-is; it fails at open time.
    fn read_target(&mut self) -> Result<String, LexerError> {
        while matches!(self.peek_char(), Some(' ' | '\t')) {
            self.chars.next();
        }

        let mut target = String::new();
        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                ' ' | '\t' | '>' => break,
                '\\' => {
                    self.chars.next();
                    if let Some((_, escaped)) = self.chars.next() {
                        target.push(escaped);
                    }
                }
                '\'' => {
                    self.chars.next();
                    let run = self.scan_single_quoted(pos)?;
                    target.push_str(&run);
                }
                '"' => {
                    self.chars.next();
                    let run = self.scan_double_quoted(pos)?;
                    target.push_str(&run);
                }
                _ => {
                    target.push(ch);
                    self.chars.next();
                }
            }
        }
        Ok(target)
    }
}
