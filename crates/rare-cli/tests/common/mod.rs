//! Shared harness for rarest end-to-end tests.
//!
//! Scratch repositories are built with the real `git` under a pinned
//! environment, then the `rarest` binary is run against them.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

fn pin_env(cmd: &mut Command, dir: &Path) {
    cmd.env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_AUTHOR_DATE", "1234567890 +0000")
        .env("GIT_COMMITTER_NAME", "Test Committer")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_DATE", "1234567890 +0000")
        .env("TZ", "UTC")
        .env("LC_ALL", "C")
        .env("LANG", "C")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", dir.parent().unwrap_or(dir))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
}

fn capture(cmd: &mut Command) -> CommandResult {
    let output = cmd.output().expect("failed to run command");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Run git in `dir` as `author`, panicking on failure.
pub fn git_as(dir: &Path, args: &[&str], author: &str) -> CommandResult {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(dir);
    pin_env(&mut cmd, dir);
    cmd.env("GIT_AUTHOR_NAME", author);
    let result = capture(&mut cmd);
    assert_eq!(result.exit_code, 0, "git {:?} failed: {}", args, result.stderr);
    result
}

/// Run the rarest binary in `dir`.
pub fn rarest(dir: &Path, args: &[&str]) -> CommandResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rarest"));
    cmd.args(args).current_dir(dir);
    pin_env(&mut cmd, dir);
    capture(&mut cmd)
}

/// Repository with `n` empty commits, alternating between two authors.
pub fn setup_repo(dir: &Path, n: usize) {
    git_as(dir, &["init", "-q", "-b", "main"], "Test Author");
    for i in 0..n {
        let author = if i % 2 == 0 { "Alice" } else { "Bob Builder" };
        let message = format!("commit number {i}");
        git_as(dir, &["commit", "-q", "--allow-empty", "-m", &message], author);
    }
}
