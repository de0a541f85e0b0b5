//! Letter/number counting for hash text.

use crate::alphabet::{classify, SymbolClass};
use crate::probability::ProbabilityModel;
use crate::HASH_LEN;

/// Letter and number counts of one hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RarityScore {
    pub letters: u8,
    pub numbers: u8,
}

impl RarityScore {
    /// True when the counts cover exactly one 40-character hash.
    ///
    /// Input outside the hex alphabet or of the wrong length is counted as-is,
    /// so a malformed hash shows up here rather than as a panic.
    pub fn is_well_formed(&self) -> bool {
        self.letters as usize + self.numbers as usize == HASH_LEN
    }

    /// Probability of a random hash having at least this many letters.
    pub fn letters_probability(&self) -> f64 {
        ProbabilityModel::tail_at_least_letters(self.letters as usize)
    }

    /// Probability of a random hash having at least this many numbers.
    pub fn numbers_probability(&self) -> f64 {
        ProbabilityModel::tail_at_least_numbers(self.numbers as usize)
    }
}

/// Count letters and numbers in hex text.
///
/// Bytes outside the alphabet count toward neither side.
pub fn score_hex(hex: &[u8]) -> RarityScore {
    let mut letters = 0u8;
    let mut numbers = 0u8;
    for &b in hex {
        match classify(b) {
            SymbolClass::Letter => letters = letters.saturating_add(1),
            SymbolClass::Number => numbers = numbers.saturating_add(1),
            SymbolClass::Invalid => {}
        }
    }
    RarityScore { letters, numbers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_letters() {
        let score = score_hex("a".repeat(40).as_bytes());
        assert_eq!(score, RarityScore { letters: 40, numbers: 0 });
        assert!(score.is_well_formed());
    }

    #[test]
    fn all_numbers() {
        let score = score_hex("0".repeat(40).as_bytes());
        assert_eq!(score, RarityScore { letters: 0, numbers: 40 });
        assert!(score.is_well_formed());
    }

    #[test]
    fn mixed_case_letters_count() {
        let score = score_hex(b"aAbBcCdDeEfF0123456789aaaaaaaaaaaaaaaaaa");
        assert_eq!(score.letters, 30);
        assert_eq!(score.numbers, 10);
    }

    #[test]
    fn short_input_is_not_well_formed() {
        let score = score_hex(b"abc123");
        assert_eq!(score, RarityScore { letters: 3, numbers: 3 });
        assert!(!score.is_well_formed());
    }

    #[test]
    fn foreign_symbols_break_the_sum() {
        let mut hex = "a".repeat(39);
        hex.push('z');
        let score = score_hex(hex.as_bytes());
        assert_eq!(score.letters, 39);
        assert_eq!(score.numbers, 0);
        assert!(!score.is_well_formed());
    }

    #[test]
    fn empty_input() {
        assert_eq!(score_hex(b""), RarityScore { letters: 0, numbers: 0 });
    }
}
