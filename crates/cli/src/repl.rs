// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read–parse–execute loop.
//!
//! The driver owns the history and the executor, and is the sole site that
//! turns structured errors into terminal output. Each iteration: read one
//! line, trim, skip empty, record in history, split at top-level pipes,
//! tokenize each stage, dispatch.

use std::io::{self, BufRead, Write};

use reef_shell::{
    split_pipeline, ExecOutcome, History, Lexer, LexerError, ShellExecutor, Stage,
};

const PROMPT: &str = "$ ";

/// Blocking line source for the REPL: the seam where a line editor with
/// completion and history recall would plug in.
pub trait LineReader {
    /// Display `prompt`, then read one line with the trailing newline
    /// stripped. Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line reader over the process's stdin.
#[derive(Debug, Default)]
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// The interactive shell loop.
pub struct Repl<R = StdinLineReader> {
    reader: R,
    history: History,
    executor: ShellExecutor,
}

impl Repl<StdinLineReader> {
    pub fn new() -> Self {
        Self::with_reader(StdinLineReader)
    }
}

impl<R: LineReader> Repl<R> {
    pub fn with_reader(reader: R) -> Self {
        Self { reader, history: History::new(), executor: ShellExecutor::new() }
    }

    /// Run until `exit` or end of input. Every diagnostic goes to stdout
    /// and returns control to the prompt; nothing aborts the loop except
    /// `exit` and EOF.
    pub async fn run(&mut self) {
        loop {
            let line = match self.reader.read_line(PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    println!("could not read the command: {err}");
                    continue;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            self.history.push(line);

            if self.dispatch(line).await == ExecOutcome::Exit {
                break;
            }
        }
    }

    /// Parse and execute one non-empty line.
    async fn dispatch(&self, line: &str) -> ExecOutcome {
        tracing::debug!(%line, "dispatching");
        let stages = match parse_stages(line) {
            Ok(stages) => stages,
            Err(err) => {
                println!("{err}");
                return ExecOutcome::Continue;
            }
        };

        match self.executor.execute(&stages, &self.history).await {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("{err}");
                ExecOutcome::Continue
            }
        }
    }
}

/// Split a line at top-level pipes and tokenize each stage.
fn parse_stages(line: &str) -> Result<Vec<Stage>, LexerError> {
    split_pipeline(line).iter().map(|stage| Lexer::tokenize(stage)).collect()
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
