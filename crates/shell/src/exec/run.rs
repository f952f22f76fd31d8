// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage and pipeline execution logic.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

use crate::builtins::{Builtin, BuiltinOutcome};
use crate::history::History;
use crate::path;
use crate::stage::Stage;

use super::error::ExecError;
use super::redirect::{self, StageFiles};

/// Signal from the executor back to the REPL loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    Continue,
    /// Standalone `exit` ran; terminate the REPL with status 0.
    Exit,
}

// ---------------------------------------------------------------------------
// Single-stage fast path
// ---------------------------------------------------------------------------

/// Run a one-stage pipeline.
///
/// Builtins execute in-process with redirection files substituted for the
/// duration. Externals are resolved first (an unresolvable name returns
/// [`ExecError::CommandNotFound`] before any redirection file is opened),
/// then spawned with inherited stdin and awaited. Exit status is not
/// propagated.
pub(crate) async fn run_single(
    stage: &Stage,
    history: &History,
) -> Result<ExecOutcome, ExecError> {
    let Some(name) = stage.name() else {
        return Ok(ExecOutcome::Continue);
    };

    if let Some(builtin) = Builtin::lookup(name) {
        let (files, errors) = redirect::open_stage_files(&stage.redirs);
        report(&errors);
        return Ok(run_builtin(builtin, stage.args(), history, files, true));
    }

    if path::find_executable(name).is_none() {
        return Err(ExecError::not_found(name));
    }

    let (files, errors) = redirect::open_stage_files(&stage.redirs);
    report(&errors);

    let mut command = Command::new(name);
    command.args(stage.args());
    // stdin stays the shell's own
    if let Some(file) = files.stdout {
        command.stdout(Stdio::from(file));
    }
    if let Some(file) = files.stderr {
        command.stderr(Stdio::from(file));
    }

    let cmd_span = tracing::info_span!(
        "shell.cmd",
        cmd = %name,
        exit_code = tracing::field::Empty,
    );

    match command.spawn() {
        Ok(mut child) => match child.wait().await {
            Ok(status) => {
                cmd_span.record("exit_code", status.code().unwrap_or(-1));
            }
            Err(error) => {
                tracing::warn!(cmd = %name, %error, "failed to wait for command");
            }
        },
        Err(error) => {
            tracing::warn!(cmd = %name, %error, "failed to spawn command");
        }
    }

    Ok(ExecOutcome::Continue)
}

// ---------------------------------------------------------------------------
// Multi-stage pipelines
// ---------------------------------------------------------------------------

/// How a stage was classified during planning.
enum StageKind {
    Builtin(Builtin),
    External,
    NotFound,
}

/// What the next stage reads as its stdin.
enum StageInput {
    /// The shell's own stdin (first stage only).
    Inherit,
    /// Read end of the previous external stage's stdout pipe.
    Pipe(tokio::process::ChildStdout),
    /// Captured output of a previous inline builtin, written to the next
    /// child's stdin after spawn.
    Buffer(Vec<u8>),
    /// The previous stage produced no pipeline output (stdout redirected to
    /// a file, spawn failed, or command not found): immediate end-of-file.
    Closed,
}

/// Run a pipeline of two or more stages.
///
/// Every stage is classified before anything launches. Stages are then
/// wired and started left to right (builtins synchronously inline,
/// externals without waiting), and finally all spawned children are
/// awaited in order. Per-stage redirections override the pipe assignment for the
/// affected stream. After return, no pipe end remains open in the parent.
pub(crate) async fn run_pipeline(
    stages: &[Stage],
    history: &History,
) -> Result<ExecOutcome, ExecError> {
    tracing::debug!(stages = stages.len(), "running pipeline");

    let kinds: Vec<StageKind> = stages
        .iter()
        .map(|stage| match stage.name() {
            Some(name) => match Builtin::lookup(name) {
                Some(builtin) => StageKind::Builtin(builtin),
                None if path::find_executable(name).is_some() => StageKind::External,
                None => StageKind::NotFound,
            },
            None => StageKind::NotFound,
        })
        .collect();

    let last = stages.len() - 1;
    let mut input = StageInput::Inherit;
    let mut children: Vec<(String, Child)> = Vec::new();

    for (i, (stage, kind)) in stages.iter().zip(&kinds).enumerate() {
        // Taking the predecessor's output up front also drops it on the
        // paths that never read it, closing the pipe end.
        let prev = std::mem::replace(&mut input, StageInput::Closed);
        let is_last = i == last;

        match kind {
            StageKind::NotFound => {
                let name = stage.name().unwrap_or_default();
                report(&[ExecError::not_found(name)]);
            }
            StageKind::Builtin(builtin) => {
                let (files, errors) = redirect::open_stage_files(&stage.redirs);
                report(&errors);
                drop(prev); // builtins read no stdin

                if is_last || files.stdout.is_some() {
                    run_builtin(*builtin, stage.args(), history, files, false);
                } else {
                    // Capture for the successor; fed to its stdin after
                    // spawn so the builtin cannot block on a full pipe.
                    let mut buffer = Vec::new();
                    let _stderr = files.stderr;
                    if let Err(error) = builtin.run(stage.args(), history, &mut buffer) {
                        tracing::warn!(builtin = builtin.name(), %error, "builtin failed");
                    }
                    input = StageInput::Buffer(buffer);
                }
            }
            StageKind::External => {
                let name = stage.name().unwrap_or_default();
                let (files, errors) = redirect::open_stage_files(&stage.redirs);
                report(&errors);

                let mut command = Command::new(name);
                command.args(stage.args());

                let mut stdin_data = None;
                match prev {
                    StageInput::Inherit => {}
                    StageInput::Pipe(upstream) => match TryInto::<Stdio>::try_into(upstream) {
                        Ok(stdio) => {
                            command.stdin(stdio);
                        }
                        Err(error) => {
                            tracing::warn!(cmd = %name, %error, "failed to adopt pipe");
                            command.stdin(Stdio::null());
                        }
                    },
                    StageInput::Buffer(data) => {
                        command.stdin(Stdio::piped());
                        stdin_data = Some(data);
                    }
                    StageInput::Closed => {
                        command.stdin(Stdio::null());
                    }
                }

                let piped = match files.stdout {
                    Some(file) => {
                        command.stdout(Stdio::from(file));
                        false
                    }
                    None if is_last => false, // the shell's stdout
                    None => {
                        command.stdout(Stdio::piped());
                        true
                    }
                };
                if let Some(file) = files.stderr {
                    command.stderr(Stdio::from(file));
                }

                match command.spawn() {
                    Ok(mut child) => {
                        if let Some(data) = stdin_data {
                            feed_stdin(&mut child, data).await;
                        }
                        if piped {
                            if let Some(stdout) = child.stdout.take() {
                                input = StageInput::Pipe(stdout);
                            }
                        }
                        children.push((name.to_string(), child));
                    }
                    Err(error) => {
                        tracing::warn!(cmd = %name, %error, "failed to spawn command");
                    }
                }
            }
        }
    }

    // Builtins already completed inline; await the externals in launch
    // order. Statuses are observed for tracing only.
    for (name, mut child) in children {
        match child.wait().await {
            Ok(status) => {
                tracing::debug!(cmd = %name, exit_code = status.code().unwrap_or(-1), "stage done");
            }
            Err(error) => {
                tracing::warn!(cmd = %name, %error, "failed to wait for command");
            }
        }
    }

    Ok(ExecOutcome::Continue)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run a builtin stage with its output sink resolved.
///
/// The stderr target file, if any, was already opened (and thus created or
/// truncated) even though builtins never write stderr. `exit` terminates
/// the REPL only when standalone; inside a pipeline it is a no-op.
fn run_builtin(
    builtin: Builtin,
    args: &[String],
    history: &History,
    files: StageFiles,
    standalone: bool,
) -> ExecOutcome {
    let _stderr = files.stderr;

    if builtin == Builtin::Exit && !standalone {
        return ExecOutcome::Continue;
    }

    let result = match files.stdout {
        Some(mut file) => builtin.run(args, history, &mut file),
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            builtin.run(args, history, &mut lock)
        }
    };

    match result {
        Ok(BuiltinOutcome::Exit) if standalone => ExecOutcome::Exit,
        Ok(_) => ExecOutcome::Continue,
        Err(error) => {
            tracing::warn!(builtin = builtin.name(), %error, "builtin failed");
            ExecOutcome::Continue
        }
    }
}

/// Write captured builtin output into a spawned child's stdin, then close
/// it to signal end-of-file.
async fn feed_stdin(child: &mut Child, data: Vec<u8>) {
    let Some(mut stdin) = child.stdin.take() else {
        return;
    };
    if let Err(error) = stdin.write_all(&data).await {
        tracing::debug!(%error, "stdin feed interrupted");
    }
    drop(stdin);
}

/// Mid-stream diagnostics go to the shell's stdout, like every other
/// user-facing message in this shell.
fn report(errors: &[ExecError]) {
    for error in errors {
        println!("{error}");
    }
}
