//! Scratch repository helpers for rare-git integration tests.
//!
//! Repositories are built with the real `git` executable under a fully pinned
//! environment so hashes do not depend on the machine's configuration.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// Apply the pinned environment to a `Command`.
fn pin_env(cmd: &mut Command, dir: &Path) {
    cmd.env("GIT_AUTHOR_NAME", "Test Author")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_AUTHOR_DATE", "1234567890 +0000")
        .env("GIT_COMMITTER_NAME", "Test Committer")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_DATE", "1234567890 +0000")
        .env("TZ", "UTC")
        .env("LC_ALL", "C")
        .env("LANG", "C")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", dir.parent().unwrap_or(dir));
}

/// Run git in `dir`, panicking on failure. Returns stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    git_as(dir, args, "Test Author")
}

/// Run git in `dir` with a specific author name.
pub fn git_as(dir: &Path, args: &[&str], author: &str) -> String {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(dir);
    pin_env(&mut cmd, dir);
    cmd.env("GIT_AUTHOR_NAME", author);
    let output = cmd.output().expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Initialise an empty repository.
pub fn init_repo(dir: &Path) {
    git(dir, &["init", "-q", "-b", "main"]);
}

/// Record an empty commit and return its hash.
pub fn commit(dir: &Path, author: &str, message: &str) -> String {
    git_as(dir, &["commit", "-q", "--allow-empty", "-m", message], author);
    git(dir, &["rev-parse", "HEAD"]).trim().to_string()
}

/// Repository with three commits by two authors. Returns hashes oldest first.
pub fn setup_two_author_repo(dir: &Path) -> Vec<String> {
    init_repo(dir);
    vec![
        commit(dir, "Alice", "initial commit"),
        commit(dir, "Bob Builder", "add line 2"),
        commit(dir, "Alice", "add foo.txt"),
    ]
}
