mod color;
mod logging;
mod options;
mod report;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use tracing::info;

use rare_git::CommitSource;
use rare_rank::{RankingEngine, Rankings};

use color::{colorize, use_color_stderr, use_color_stdout, Color};
use options::{Cli, RunConfig, Target};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(2),
            }
        }
    };

    let stderr_color = use_color_stderr(cli.color_mode());
    let result = cli.validate().and_then(|config| {
        logging::init_tracing(config.verbosity, stderr_color);
        run(&config)
    });

    if let Err(e) = result {
        eprintln!("{} {e:#}", colorize("error:", Color::Red, stderr_color));
        process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let engine = RankingEngine::new(config.top_k)?;

    let source = match &config.target {
        Target::Local(path) => CommitSource::local(path, config.git.clone())?,
        Target::Remote(url) => CommitSource::remote(url, config.git.clone())
            .with_context(|| format!("failed to clone from {url}"))?,
    };

    let commits = source
        .list_commits(config.author.as_deref())
        .context("failed to log commits")?;

    let by_author = config
        .author
        .as_deref()
        .map(|a| format!(" by {a}"))
        .unwrap_or_default();
    // An empty history still prints both (empty) lists and the footnote.
    let rankings = if commits.is_empty() {
        info!("no commits found{by_author} in {}!", source.location());
        Rankings::default()
    } else {
        info!(
            "total unique commits{by_author} in {}: {}",
            source.location(),
            commits.len()
        );
        info!("searching for rarest...");
        engine.rank(&commits, &source)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render(&mut out, &rankings, config.top_k, use_color_stdout(config.color))?;
    Ok(())
}
