//! Human-readable rendering of the two ranked lists.

use std::io::{self, Write};

use rare_rank::{RankedCommit, Rankings};

use crate::color::{colorize, Color};

/// Messages longer than this are cut and end in `...`.
const MESSAGE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Letters,
    Numbers,
}

impl Metric {
    fn noun(self) -> &'static str {
        match self {
            Metric::Letters => "letters",
            Metric::Numbers => "numbers",
        }
    }

    fn count(self, commit: &RankedCommit) -> u8 {
        match self {
            Metric::Letters => commit.letters,
            Metric::Numbers => commit.numbers,
        }
    }

    fn probability(self, commit: &RankedCommit) -> f64 {
        match self {
            Metric::Letters => commit.prob_letters,
            Metric::Numbers => commit.prob_numbers,
        }
    }

    fn odds(self, commit: &RankedCommit) -> f64 {
        match self {
            Metric::Letters => commit.letters_odds(),
            Metric::Numbers => commit.numbers_odds(),
        }
    }
}

/// Write both lists and the closing footnote.
pub fn render(out: &mut impl Write, rankings: &Rankings, top_k: usize, color: bool) -> io::Result<()> {
    render_list(out, Metric::Letters, &rankings.letters, top_k, color)?;
    render_list(out, Metric::Numbers, &rankings.numbers, top_k, color)?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        colorize(
            "(probabilities calculated for x or more letters/numbers)",
            Color::Dim,
            color
        )
    )
}

fn render_list(
    out: &mut impl Write,
    metric: Metric,
    commits: &[RankedCommit],
    top_k: usize,
    color: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "top {top_k} most {}:", metric.noun())?;
    for (i, commit) in commits.iter().enumerate() {
        let odds = group_thousands(metric.odds(commit).round() as u64);
        writeln!(
            out,
            "#{}: {} - {} {} ({:.7}%) (1 in {})",
            i + 1,
            colorize(commit.hash.as_str(), Color::Blue, color),
            metric.count(commit),
            metric.noun(),
            metric.probability(commit) * 100.0,
            colorize(&odds, Color::Red, color),
        )?;
        writeln!(
            out,
            "  by {} on {}",
            colorize(&commit.author, Color::Yellow, color),
            colorize(&commit.timestamp, Color::Yellow, color),
        )?;
        writeln!(out, "  message: \"{}\"", ellipsize(&commit.message, MESSAGE_WIDTH))?;
    }
    Ok(())
}

/// Single-line form of `text`, at most `max_len` characters.
pub fn ellipsize(text: &str, max_len: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    if flat.chars().count() <= max_len {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_len.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
