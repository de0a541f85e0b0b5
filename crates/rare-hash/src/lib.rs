//! Commit hash identity and rarity scoring for rarest.
//!
//! This crate provides the `CommitHash` type, the letter/number scorer, and
//! the precomputed binomial tail table used to turn raw counts into
//! probabilities.

mod error;
pub mod alphabet;
mod hash;
pub mod probability;
pub mod score;

pub use error::HashError;
pub use hash::CommitHash;
pub use probability::ProbabilityModel;
pub use score::RarityScore;

/// Number of characters in a commit hash.
pub const HASH_LEN: usize = 40;
