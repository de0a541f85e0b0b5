//! Streaming top-K ranking of commit hashes by letter and number count.
//!
//! A [`RankingEngine`] makes one pass over the corpus, scoring each hash once
//! and offering it to two [`BoundedLeaderboard`]s. Only the surviving
//! finalists are resolved into [`RankedCommit`]s, and only they have their
//! messages fetched.

mod engine;
mod error;
pub mod leaderboard;
mod record;

pub use engine::{Candidate, Finalists, MessageSource, NoMessages, RankingEngine};
pub use error::RankError;
pub use leaderboard::{BoundedLeaderboard, ScoreEntry};
pub use record::{CommitRecord, RankedCommit, Rankings};
