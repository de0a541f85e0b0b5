use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;

use rayon::prelude::*;
use tracing::{debug, warn};

use rare_hash::{CommitHash, HASH_LEN};

use crate::leaderboard::{BoundedLeaderboard, ScoreEntry};
use crate::record::{CommitRecord, RankedCommit, Rankings};
use crate::RankError;

/// Lazy lookup of a commit message by hash.
///
/// Called only for finalists, possibly from several threads at once.
pub trait MessageSource: Sync {
    type Error: fmt::Display;

    fn commit_message(&self, hash: &CommitHash) -> Result<String, Self::Error>;
}

/// A message source that has nothing to say about any commit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMessages;

impl MessageSource for NoMessages {
    type Error = std::convert::Infallible;

    fn commit_message(&self, _hash: &CommitHash) -> Result<String, Self::Error> {
        Ok(String::new())
    }
}

/// Leaderboard item: the hash orders ties, the index points back into the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub hash: CommitHash,
    pub index: usize,
}

/// Leaderboard contents after a pass, before messages are resolved.
#[derive(Debug, Clone)]
pub struct Finalists {
    pub letters: BoundedLeaderboard<Candidate>,
    pub numbers: BoundedLeaderboard<Candidate>,
}

impl Finalists {
    fn new(top_k: NonZeroUsize) -> Self {
        Self {
            letters: BoundedLeaderboard::with_capacity(top_k),
            numbers: BoundedLeaderboard::with_capacity(top_k),
        }
    }

    /// Merge the finalists of another shard of the same corpus.
    pub fn absorb(&mut self, other: Finalists) {
        self.letters.absorb(other.letters);
        self.numbers.absorb(other.numbers);
    }
}

/// Single-pass ranking of commits by letter and number count.
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine {
    top_k: NonZeroUsize,
}

impl RankingEngine {
    pub fn new(top_k: usize) -> Result<Self, RankError> {
        let top_k = NonZeroUsize::new(top_k).ok_or(RankError::InvalidCapacity(top_k))?;
        Ok(Self { top_k })
    }

    pub fn top_k(&self) -> usize {
        self.top_k.get()
    }

    /// Score every commit once and resolve the finalists of both lists.
    pub fn rank<M: MessageSource>(&self, commits: &[CommitRecord], messages: &M) -> Rankings {
        let finalists = self.scan(commits);
        self.finalize(commits, finalists, messages)
    }

    /// The pass alone: feed both leaderboards from one traversal.
    pub fn scan(&self, commits: &[CommitRecord]) -> Finalists {
        self.scan_shard(commits, 0)
    }

    /// Scan a contiguous shard that starts at `offset` in the full corpus.
    ///
    /// Shards scanned separately can be merged with [`Finalists::absorb`] and
    /// finalized against the full corpus.
    pub fn scan_shard(&self, shard: &[CommitRecord], offset: usize) -> Finalists {
        let mut finalists = Finalists::new(self.top_k);
        let mut malformed = 0usize;

        for (i, record) in shard.iter().enumerate() {
            let score = record.hash.score();
            if !score.is_well_formed() {
                malformed += 1;
            }
            let candidate = Candidate {
                hash: record.hash,
                index: offset + i,
            };
            finalists
                .letters
                .offer(ScoreEntry::new(score.letters, candidate));
            finalists
                .numbers
                .offer(ScoreEntry::new(score.numbers, candidate));
        }

        debug!(
            scanned = shard.len(),
            letters_floor = finalists.letters.current_minimum(),
            numbers_floor = finalists.numbers.current_minimum(),
            "scan finished"
        );
        if malformed > 0 {
            warn!("{malformed} hashes do not split into {HASH_LEN} letters and numbers");
        }
        finalists
    }

    /// Drain both leaderboards and resolve each finalist.
    ///
    /// `commits` must be the corpus the finalists were scanned from. Messages
    /// are fetched once per distinct finalist, in parallel.
    pub fn finalize<M: MessageSource>(
        &self,
        commits: &[CommitRecord],
        finalists: Finalists,
        messages: &M,
    ) -> Rankings {
        let letters = finalists.letters.into_sorted();
        let numbers = finalists.numbers.into_sorted();

        let mut wanted: Vec<Candidate> = letters
            .iter()
            .chain(numbers.iter())
            .map(|entry| entry.item)
            .collect();
        wanted.sort_unstable_by_key(|candidate| candidate.index);
        wanted.dedup_by_key(|candidate| candidate.index);
        debug!(count = wanted.len(), "fetching finalist messages");

        let fetched: HashMap<usize, String> = wanted
            .par_iter()
            .map(|candidate| (candidate.index, fetch_message(messages, &candidate.hash)))
            .collect();

        let resolve = |entries: Vec<ScoreEntry<Candidate>>| -> Vec<RankedCommit> {
            entries
                .into_iter()
                .map(|entry| {
                    let Candidate { hash, index } = entry.item;
                    let message = fetched.get(&index).cloned().unwrap_or_default();
                    match commits.get(index) {
                        Some(record) => ranked(record, message),
                        None => {
                            // Wrong shard offset or corpus; keep the finalist anyway.
                            warn!(index, %hash, "finalist is outside the corpus, author and date unknown");
                            ranked(&CommitRecord::new(hash, "", ""), message)
                        }
                    }
                })
                .collect()
        };

        Rankings {
            letters: resolve(letters),
            numbers: resolve(numbers),
        }
    }
}

fn fetch_message<M: MessageSource>(messages: &M, hash: &CommitHash) -> String {
    match messages.commit_message(hash) {
        Ok(message) => message,
        Err(e) => {
            warn!("failed to get commit message for {hash}: {e}");
            String::new()
        }
    }
}

fn ranked(record: &CommitRecord, message: String) -> RankedCommit {
    let score = record.hash.score();
    RankedCommit {
        hash: record.hash,
        letters: score.letters,
        numbers: score.numbers,
        prob_letters: score.letters_probability(),
        prob_numbers: score.numbers_probability(),
        author: record.author.clone(),
        timestamp: record.timestamp.clone(),
        message,
    }
}
