//! Command-line options and their validation into a run configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use rare_git::GitOptions;

use crate::color::ColorMode;

#[derive(Debug, Parser)]
#[command(
    name = "rarest",
    about = "Finds the rarest commit hashes in a repository by count of numbers/letters in their 40-digit hash",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Path to a git repository, or a url with -r [default: current dir]
    path: Option<String>,

    /// Treat <PATH> as a remote repository url and clone it temporarily
    #[arg(short = 'r', long)]
    remote: bool,

    /// Number of top hashes to display for each of letters/numbers
    #[arg(
        short = 'k',
        long = "topk",
        visible_alias = "top-k",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    top_k: i64,

    /// Only consider commits by this author (git author name)
    #[arg(short = 'a', long)]
    author: Option<String>,

    /// Colorize output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorWhen,

    /// Show debug output, including clone progress
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Give up on any single git command after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

/// Color mode argument: `--color=<when>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// How much the tool logs to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Default tracing filter directive for this level.
    pub fn filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Where the commits come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Local(PathBuf),
    Remote(String),
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: Target,
    pub top_k: usize,
    pub author: Option<String>,
    pub color: ColorMode,
    pub verbosity: Verbosity,
    pub git: GitOptions,
}

impl Cli {
    /// The verbosity is needed before validation, to set up logging.
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.into()
    }

    pub fn validate(self) -> Result<RunConfig> {
        let top_k = match usize::try_from(self.top_k) {
            Ok(k) if k > 0 => k,
            _ => bail!("k must be a positive integer (got {})", self.top_k),
        };

        let target = if self.remote {
            Target::Remote(self.path.clone().unwrap_or_default())
        } else {
            Target::Local(PathBuf::from(self.path.as_deref().unwrap_or(".")))
        };

        let verbosity = self.verbosity();
        Ok(RunConfig {
            target,
            top_k,
            author: self.author,
            color: self.color.into(),
            verbosity,
            git: GitOptions {
                verbose: verbosity == Verbosity::Verbose,
                timeout: self.timeout.map(Duration::from_secs),
            },
        })
    }
}
