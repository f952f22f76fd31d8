//! End-to-end REPL scenarios driving the built `reef` binary.
//!
//! Each test feeds a script to the shell's stdin and asserts on captured
//! stdout and the created filesystem state. EOF after the script terminates
//! the shell with status 0.

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/builtins.rs"]
mod builtins;
#[path = "specs/pipeline.rs"]
mod pipeline;
#[path = "specs/redirection.rs"]
mod redirection;
#[path = "specs/repl.rs"]
mod repl;
