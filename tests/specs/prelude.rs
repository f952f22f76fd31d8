//! Shared harness for end-to-end REPL scenarios.

use std::path::{Path, PathBuf};
use std::process::Output;

/// A scripted interactive session against the built binary.
pub struct Session {
    script: String,
    cwd: Option<PathBuf>,
    env: Vec<(String, String)>,
}

/// Start an empty session; chain `.line(..)` calls and finish with `.run()`.
pub fn session() -> Session {
    Session { script: String::new(), cwd: None, env: Vec::new() }
}

impl Session {
    /// Append one input line (newline added).
    pub fn line(mut self, line: &str) -> Self {
        self.script.push_str(line);
        self.script.push('\n');
        self
    }

    /// Run the shell from the given working directory.
    pub fn cwd(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Override an environment variable for the session.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Launch the binary, feed the script, wait for termination.
    pub fn run(self) -> SessionOutput {
        let mut cmd = assert_cmd::Command::cargo_bin("reef").expect("reef binary must build");
        cmd.write_stdin(self.script);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("shell must run to completion");
        SessionOutput { output }
    }
}

/// Captured result of a finished session.
pub struct SessionOutput {
    output: Output,
}

impl SessionOutput {
    pub fn succeeds(self) -> Self {
        assert!(
            self.output.status.success(),
            "shell exited with {:?}\nstdout: {}\nstderr: {}",
            self.output.status.code(),
            self.stdout(),
            String::from_utf8_lossy(&self.output.stderr),
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {:?}\nstdout: {}",
            needle,
            self.stdout(),
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout().contains(needle),
            "stdout unexpectedly contains {:?}\nstdout: {}",
            needle,
            self.stdout(),
        );
        self
    }
}
