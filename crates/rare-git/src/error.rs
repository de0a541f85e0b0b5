use std::path::PathBuf;
use std::process::ExitStatus;

use rare_hash::HashError;

/// Errors produced while talking to git.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} timed out")]
    Timeout { command: String },

    #[error("{command} failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("invalid directory \"{}\". maybe add -r if this is a url?", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("url must be provided for remote repo")]
    MissingUrl,

    #[error("malformed git log line: {line:?}")]
    MalformedLog { line: String },

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitError>;
