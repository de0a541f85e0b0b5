use rare_hash::{CommitHash, ProbabilityModel};

/// A commit as listed by the commit source.
///
/// The message is not carried here; it is looked up by hash, and only for
/// finalists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: CommitHash,
    pub author: String,
    /// Commit date as `1999-12-31 00:00:00 -0800`.
    pub timestamp: String,
}

impl CommitRecord {
    pub fn new(hash: CommitHash, author: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            hash,
            author: author.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// A finalist with its rarity figures and resolved message.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCommit {
    pub hash: CommitHash,
    /// Letters out of 40 in the hash.
    pub letters: u8,
    /// Digits out of 40 in the hash.
    pub numbers: u8,
    /// Probability of a random hash having `letters` or more letters.
    pub prob_letters: f64,
    /// Probability of a random hash having `numbers` or more digits.
    pub prob_numbers: f64,
    pub author: String,
    pub timestamp: String,
    /// Commit subject; empty when the lookup failed.
    pub message: String,
}

impl RankedCommit {
    /// "1 in N" for the letter count.
    pub fn letters_odds(&self) -> f64 {
        ProbabilityModel::odds(self.prob_letters)
    }

    /// "1 in N" for the number count.
    pub fn numbers_odds(&self) -> f64 {
        ProbabilityModel::odds(self.prob_numbers)
    }
}

/// The two ranked lists produced by one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rankings {
    /// Most letter-heavy first.
    pub letters: Vec<RankedCommit>,
    /// Most number-heavy first.
    pub numbers: Vec<RankedCommit>,
}

impl Rankings {
    /// True when the corpus had no commits.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty() && self.numbers.is_empty()
    }
}
