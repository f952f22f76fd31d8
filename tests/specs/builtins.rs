//! Builtin behavior through the full shell: quoting, `type`, `pwd`/`cd`.

use crate::prelude::*;

#[test]
fn echo_joins_arguments() {
    session().line("echo hello").run().succeeds().stdout_has("hello\n");
}

#[test]
fn echo_single_quotes_preserve_spacing() {
    session()
        .line("echo 'hello   world'")
        .run()
        .succeeds()
        .stdout_has("hello   world\n");
}

#[test]
fn echo_double_quote_and_unquoted_escapes() {
    session()
        .line(r#"echo "a\"b" \$ \\"#)
        .run()
        .succeeds()
        .stdout_has("a\"b $ \\\n");
}

#[test]
fn adjacent_quoted_runs_form_one_word() {
    session()
        .line(r#"echo a"b c"d"#)
        .run()
        .succeeds()
        .stdout_has("ab cd\n");
}

#[test]
fn type_reports_shell_builtins() {
    session()
        .line("type echo")
        .run()
        .succeeds()
        .stdout_has("echo is a shell builtin\n");
}

#[test]
fn type_reports_not_found_names() {
    let empty = tempfile::tempdir().unwrap();
    session()
        .env("PATH", &empty.path().display().to_string())
        .line("type nosuch")
        .run()
        .succeeds()
        .stdout_has("nosuch not found\n");
}

#[test]
fn pwd_observes_cd() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().canonicalize().unwrap();
    session()
        .line(&format!("cd {}", target.display()))
        .line("pwd")
        .run()
        .succeeds()
        .stdout_has(&format!("{}\n", target.display()));
}

#[test]
fn cd_failure_reports_and_preserves_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let start = dir.path().canonicalize().unwrap();
    session()
        .cwd(&start)
        .line("cd /no/such/dir")
        .line("pwd")
        .run()
        .succeeds()
        .stdout_has("cd: /no/such/dir: No such file or directory\n")
        .stdout_has(&format!("{}\n", start.display()));
}

#[test]
fn cd_tilde_uses_home() {
    let home = tempfile::tempdir().unwrap();
    let resolved = home.path().canonicalize().unwrap();
    session()
        .env("HOME", &resolved.display().to_string())
        .line("cd ~")
        .line("pwd")
        .run()
        .succeeds()
        .stdout_has(&format!("{}\n", resolved.display()));
}
