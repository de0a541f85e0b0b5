//! git plumbing for rarest.
//!
//! Commits are enumerated and messages looked up by running the `git`
//! executable. Remote repositories are cloned bare and blob-less into a
//! temporary directory first.

pub mod command;
mod error;
mod source;

pub use command::{GitCommand, GitOutput, StdioMode};
pub use error::{GitError, Result};
pub use source::{parse_log, CommitSource, GitOptions};
