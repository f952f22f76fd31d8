// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! reef, an interactive POSIX-style command shell.
//!
//! The binary takes no flags: it starts the REPL on a current-thread
//! runtime and runs until `exit` or end of input. Log output is controlled
//! via `RUST_LOG` and goes to stderr so it never mixes with shell output.

mod repl;

use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    repl::Repl::new().run().await;
    Ok(())
}
