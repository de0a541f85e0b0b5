use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bstr::ByteSlice;
use tempfile::TempDir;
use tracing::{debug, info};

use rare_hash::CommitHash;
use rare_rank::{CommitRecord, MessageSource};

use crate::command::{GitCommand, StdioMode};
use crate::error::{GitError, Result};

/// `git log` format: hash, committer date (ISO-like), author name, NUL separated.
const LOG_FORMAT: &str = "--format=%H%x00%ci%x00%an";

/// Options threaded into every git invocation.
#[derive(Debug, Clone, Default)]
pub struct GitOptions {
    /// Show clone progress instead of capturing it.
    pub verbose: bool,
    /// Upper bound for each git invocation.
    pub timeout: Option<Duration>,
}

/// A repository to read commits from.
///
/// Remote sources own a temporary bare clone that is deleted when the source
/// is dropped.
#[derive(Debug)]
pub struct CommitSource {
    dir: PathBuf,
    location: String,
    options: GitOptions,
    _clone: Option<TempDir>,
}

impl CommitSource {
    /// Read from a repository already on disk.
    pub fn local(path: impl AsRef<Path>, options: GitOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(GitError::InvalidDirectory(path.to_path_buf()));
        }
        Ok(Self {
            dir: path.to_path_buf(),
            location: path.display().to_string(),
            options,
            _clone: None,
        })
    }

    /// Clone `url` into a temporary bare, blob-less repository and read from it.
    pub fn remote(url: &str, options: GitOptions) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(GitError::MissingUrl);
        }
        info!("temporarily cloning remote repo {url}...");
        let tmp = tempfile::Builder::new().prefix("rarest-").tempdir()?;

        let streams = if options.verbose {
            StdioMode::Inherit
        } else {
            StdioMode::Pipe
        };
        GitCommand::new()
            .args(["clone", "--bare", "--filter=blob:none", "--"])
            .arg(url)
            .arg(tmp.path())
            .stdout(streams)
            .stderr(streams)
            .timeout(options.timeout)
            .output()?;

        Ok(Self {
            dir: tmp.path().to_path_buf(),
            location: url.to_string(),
            options,
            _clone: Some(tmp),
        })
    }

    /// Path or url this source was opened from.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Directory git runs in.
    pub fn git_dir(&self) -> &Path {
        &self.dir
    }

    fn git(&self) -> GitCommand {
        GitCommand::new()
            .working_dir(&self.dir)
            .timeout(self.options.timeout)
    }

    /// List every commit reachable from HEAD, optionally only those by `author`.
    ///
    /// A repository without any commits yields an empty list.
    pub fn list_commits(&self, author: Option<&str>) -> Result<Vec<CommitRecord>> {
        // Fails outright when this is not a repository at all.
        self.git().args(["rev-parse", "--git-dir"]).output()?;

        let head = self
            .git()
            .args(["rev-parse", "--verify", "--quiet", "HEAD"])
            .run()?;
        if !head.success() {
            debug!(location = %self.location, "HEAD does not resolve, no commits");
            return Ok(Vec::new());
        }

        info!("logging commits...");
        let mut cmd = self.git().arg("log").arg(LOG_FORMAT);
        if let Some(author) = author {
            cmd = cmd.arg(format!("--author={author}"));
        }
        parse_log(&cmd.output()?)
    }
}

impl MessageSource for CommitSource {
    type Error = GitError;

    fn commit_message(&self, hash: &CommitHash) -> Result<String> {
        let out = self
            .git()
            .args(["log", "-n", "1", "--format=%s"])
            .arg(hash.as_str())
            .output()?;
        Ok(out.trim().to_str_lossy().into_owned())
    }
}

/// Parse `git log` output produced with [`LOG_FORMAT`].
///
/// Blank lines are skipped. Repeated hashes keep their first occurrence.
pub fn parse_log(output: &[u8]) -> Result<Vec<CommitRecord>> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.splitn_str(3, b"\0");
        let (Some(hash), Some(date), Some(author)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(GitError::MalformedLog {
                line: line.to_str_lossy().into_owned(),
            });
        };

        let hash = CommitHash::from_hex_bytes(hash.trim())?;
        if !seen.insert(hash) {
            continue;
        }
        records.push(CommitRecord::new(
            hash,
            author.trim().to_str_lossy(),
            date.trim().to_str_lossy(),
        ));
    }

    debug!(count = records.len(), "parsed git log");
    Ok(records)
}
