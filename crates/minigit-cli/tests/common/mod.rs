//! Shared test harness for minigit CLI integration tests.
//!
//! Every command runs against a fresh temp directory with the environment
//! pinned so results do not depend on the caller's shell.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the `minigit` binary in `dir` with the given arguments.
pub fn minigit(dir: &Path, args: &[&str]) -> CommandResult {
    minigit_with_stdin(dir, args, b"")
}

/// Run the `minigit` binary in `dir`, feeding `stdin`.
pub fn minigit_with_stdin(dir: &Path, args: &[&str], stdin: &[u8]) -> CommandResult {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minigit"))
        .args(args)
        .current_dir(dir)
        .env_remove("MINIGIT_DIR")
        .env_remove("MINIGIT_VERIFY_ON_READ")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn minigit");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for minigit");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Run and assert success, returning trimmed stdout.
pub fn minigit_ok(dir: &Path, args: &[&str]) -> String {
    let result = minigit(dir, args);
    assert_eq!(
        result.exit_code, 0,
        "minigit {:?} failed: {}",
        args, result.stderr
    );
    result.stdout.trim_end().to_string()
}

/// Store `content` as a blob and return its hash.
pub fn store_blob(dir: &Path, name: &str, content: &str) -> String {
    std::fs::write(dir.join(name), content).unwrap();
    minigit_ok(dir, &["hash-object", "-w", name])
}
