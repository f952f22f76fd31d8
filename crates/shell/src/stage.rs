// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed command data model: stages and their redirections.
//!
//! A pipeline is an ordered list of [`Stage`]s; the executor receives the
//! whole list as a plain data structure before anything launches.

/// Output redirection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirMode {
    /// `>`: create if absent, truncate to zero length.
    Truncate,
    /// `>>`: create if absent, every write positioned at end-of-file.
    Append,
}

/// Which standard stream a redirection directive applies to.
///
/// Only fd 1 and fd 2 are recognized as redirection prefixes; anything else
/// stays ordinary word text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirFd {
    Stdout,
    Stderr,
}

/// A single output redirection: mode plus target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRedirect {
    pub mode: RedirMode,
    pub target: String,
}

impl OutputRedirect {
    pub fn new(mode: RedirMode, target: impl Into<String>) -> Self {
        Self { mode, target: target.into() }
    }
}

/// Per-stage redirections, at most one per stream.
///
/// When a stage contains several directives for the same stream, the last
/// one wins; earlier targets are never recorded and never opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirections {
    pub stdout: Option<OutputRedirect>,
    pub stderr: Option<OutputRedirect>,
}

impl Redirections {
    /// Record a directive, replacing any earlier one for the same stream.
    pub fn set(&mut self, fd: RedirFd, redirect: OutputRedirect) {
        match fd {
            RedirFd::Stdout => self.stdout = Some(redirect),
            RedirFd::Stderr => self.stderr = Some(redirect),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stdout.is_none() && self.stderr.is_none()
    }
}

/// One pipeline stage: the command word, its arguments, and redirections.
///
/// `tokens[0]` is the command name. A stage with no tokens is invalid and
/// aborts the pipeline it appears in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    pub tokens: Vec<String>,
    pub redirs: Redirections,
}

impl Stage {
    /// The command name, if the stage has any tokens.
    pub fn name(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// The argument vector after the command name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
