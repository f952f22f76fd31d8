// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the stage executor.
//!
//! The executor writes final-stage output to the shell's own stdout, so
//! assertions observe bytes through per-stage redirections into temp files.

use super::*;
use crate::{split_pipeline, History, Lexer, Stage};

mod pipeline;
mod redirections;
mod single;

/// Create a default executor for tests.
pub(crate) fn executor() -> ShellExecutor {
    ShellExecutor::new()
}

/// Parse a full line into pipeline stages.
pub(crate) fn stages(line: &str) -> Vec<Stage> {
    split_pipeline(line)
        .iter()
        .map(|part| Lexer::tokenize(part).expect("test line must tokenize"))
        .collect()
}

/// Execute a line against an empty history.
pub(crate) async fn run(line: &str) -> Result<ExecOutcome, ExecError> {
    executor().execute(&stages(line), &History::new()).await
}
