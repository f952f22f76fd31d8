// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection file setup for stages.

use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;

use crate::stage::{OutputRedirect, RedirMode, Redirections};

use super::error::ExecError;

/// Files opened for one stage's redirections. A `None` slot means the
/// stream keeps whatever the executor assigned (terminal or pipe).
pub(crate) struct StageFiles {
    pub(crate) stdout: Option<File>,
    pub(crate) stderr: Option<File>,
}

/// Open a stage's redirection targets.
///
/// A target that cannot be opened is reported through the error list and
/// its slot stays `None`, so the stream falls back to the shell's own and
/// the stage still executes.
pub(crate) fn open_stage_files(redirs: &Redirections) -> (StageFiles, Vec<ExecError>) {
    let mut errors = Vec::new();
    let stdout = open_slot(redirs.stdout.as_ref(), &mut errors);
    let stderr = open_slot(redirs.stderr.as_ref(), &mut errors);
    (StageFiles { stdout, stderr }, errors)
}

fn open_slot(redirect: Option<&OutputRedirect>, errors: &mut Vec<ExecError>) -> Option<File> {
    let redirect = redirect?;
    match open_target(redirect) {
        Ok(file) => Some(file),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Truncate ⇒ create + write + truncate; Append ⇒ create + write + append.
/// Created files get mode `0o644`.
fn open_target(redirect: &OutputRedirect) -> Result<File, ExecError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).mode(0o644);
    match redirect.mode {
        RedirMode::Truncate => options.truncate(true),
        RedirMode::Append => options.append(true),
    };
    options
        .open(&redirect.target)
        .map_err(|source| ExecError::RedirectOpenFailed { target: redirect.target.clone(), source })
}
