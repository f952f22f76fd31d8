//! Loop-level scenarios: prompt, termination, empty lines, diagnostics.

use crate::prelude::*;

/// EOF alone terminates with status 0.
#[test]
fn eof_terminates_cleanly() {
    session().run().succeeds().stdout_has("$ ");
}

/// `exit` terminates with status 0 and stops reading input.
#[test]
fn exit_terminates_and_stops_reading() {
    session()
        .line("exit")
        .line("echo after")
        .run()
        .succeeds()
        .stdout_lacks("after");
}

/// A numeric argument to `exit` is ignored; status is still 0.
#[test]
fn exit_ignores_status_argument() {
    session().line("exit 7").run().succeeds();
}

/// Empty and whitespace-only lines silently reprompt.
#[test]
fn empty_lines_reprompt() {
    let out = session().line("").line("   ").line("echo done").run().succeeds();
    out.stdout_has("done\n");
}

/// Unknown commands report and return to the prompt.
#[test]
fn unknown_command_reports_and_continues() {
    session()
        .line("nosuchzzz")
        .line("echo still-here")
        .run()
        .succeeds()
        .stdout_has("nosuchzzz: command not found")
        .stdout_has("still-here\n");
}

/// An unterminated quote reports and returns to the prompt.
#[test]
fn unterminated_quote_reports_and_continues() {
    session()
        .line("echo 'oops")
        .line("echo recovered")
        .run()
        .succeeds()
        .stdout_has("unterminated single quote")
        .stdout_has("recovered\n");
}

/// History lists entries with 1-based indexes, including itself.
#[test]
fn history_lists_commands_in_order() {
    session()
        .line("echo one")
        .line("echo two")
        .line("history")
        .run()
        .succeeds()
        .stdout_has("1 echo one\n")
        .stdout_has("2 echo two\n")
        .stdout_has("3 history\n");
}

/// Lines that fail to parse still land in history.
#[test]
fn history_keeps_unparsed_lines() {
    session()
        .line("echo 'broken")
        .line("history")
        .run()
        .succeeds()
        .stdout_has("1 echo 'broken\n");
}
