use std::ffi::{OsStr, OsString};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use bstr::ByteSlice;
use tracing::debug;

use crate::error::{GitError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Stdio mode for subprocess streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Inherit the parent process's stream.
    Inherit,
    /// Pipe the stream (capture it).
    Pipe,
    /// Redirect to /dev/null.
    Null,
}

impl StdioMode {
    fn to_stdio(self) -> Stdio {
        match self {
            StdioMode::Inherit => Stdio::inherit(),
            StdioMode::Pipe => Stdio::piped(),
            StdioMode::Null => Stdio::null(),
        }
    }
}

/// Result of running git.
#[derive(Debug)]
pub struct GitOutput {
    pub status: ExitStatus,
    /// Captured stdout (empty if not piped).
    pub stdout: Vec<u8>,
    /// Captured stderr (empty if not piped).
    pub stderr: Vec<u8>,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Builder for one git invocation.
///
/// Captures stdout and stderr by default. With a timeout, both streams are
/// drained on reader threads while the child is polled, so a long `git log`
/// cannot stall on a full pipe.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: OsString,
    args: Vec<OsString>,
    env_vars: Vec<(OsString, OsString)>,
    stdout_mode: StdioMode,
    stderr_mode: StdioMode,
    working_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCommand {
    /// A `git` invocation with no arguments yet.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Same builder for another executable.
    pub fn with_program(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            env_vars: Vec::new(),
            stdout_mode: StdioMode::Pipe,
            stderr_mode: StdioMode::Pipe,
            working_dir: None,
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> Self {
        for arg in args {
            self.args.push(arg.as_ref().to_os_string());
        }
        self
    }

    pub fn env(mut self, key: impl AsRef<OsStr>, val: impl AsRef<OsStr>) -> Self {
        self.env_vars
            .push((key.as_ref().to_os_string(), val.as_ref().to_os_string()));
        self
    }

    pub fn stdout(mut self, mode: StdioMode) -> Self {
        self.stdout_mode = mode;
        self
    }

    pub fn stderr(mut self, mode: StdioMode) -> Self {
        self.stderr_mode = mode;
        self
    }

    pub fn working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Kill the child if it runs longer than `duration`.
    pub fn timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, val) in &self.env_vars {
            cmd.env(key, val);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(self.stdout_mode.to_stdio());
        cmd.stderr(self.stderr_mode.to_stdio());
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// The command line, for messages.
    pub fn command_string(&self) -> String {
        let mut s = self.program.to_string_lossy().to_string();
        for arg in &self.args {
            s.push(' ');
            s.push_str(&arg.to_string_lossy());
        }
        s
    }

    /// Run to completion and return whatever it produced, successful or not.
    pub fn run(&self) -> Result<GitOutput> {
        let cmd_str = self.command_string();
        debug!(command = %cmd_str, "running");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| GitError::Spawn {
                command: cmd_str.clone(),
                source,
            })?;

        let Some(timeout) = self.timeout else {
            let output = child.wait_with_output().map_err(|source| GitError::Spawn {
                command: cmd_str,
                source,
            })?;
            return Ok(GitOutput {
                status: output.status,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        };

        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);
        let start = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if start.elapsed() > timeout => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(GitError::Timeout { command: cmd_str });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    return Err(GitError::Spawn {
                        command: cmd_str,
                        source,
                    })
                }
            }
        };

        Ok(GitOutput {
            status,
            stdout: collect(stdout),
            stderr: collect(stderr),
        })
    }

    /// Run and return stdout, turning a non-zero exit into an error.
    pub fn output(&self) -> Result<Vec<u8>> {
        let output = self.run()?;
        if !output.success() {
            return Err(GitError::CommandFailed {
                command: self.command_string(),
                status: output.status,
                stderr: output.stderr.trim().to_str_lossy().into_owned(),
            });
        }
        Ok(output.stdout)
    }
}

fn drain<R: Read + Send + 'static>(mut stream: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
