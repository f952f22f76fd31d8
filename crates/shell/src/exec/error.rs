// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor error types.
//!
//! The `Display` strings are the exact user-facing diagnostics; printing
//! sites emit them verbatim, on stdout, and the loop continues.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    /// Command name is neither a builtin nor on `PATH`.
    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    /// A redirection target could not be opened or created. The stage still
    /// runs, with the affected stream falling back to the shell's own.
    #[error("err: can not open file: {source}")]
    RedirectOpenFailed {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExecError {
    pub fn not_found(name: impl Into<String>) -> Self {
        ExecError::CommandNotFound { name: name.into() }
    }
}
