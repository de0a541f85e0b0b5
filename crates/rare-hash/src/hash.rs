use std::fmt;
use std::str::FromStr;

use crate::alphabet::is_hex_symbol;
use crate::score::{score_hex, RarityScore};
use crate::{HashError, HASH_LEN};

/// A 40-character commit identifier, kept in its hexadecimal text form.
///
/// Letters are normalized to lowercase on parse. Ordering is lexicographic
/// over the hex text, which is also the byte order of the underlying digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitHash([u8; HASH_LEN]);

impl CommitHash {
    /// Parse a hex string of exactly 40 characters.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        Self::from_hex_bytes(hex.as_bytes())
    }

    /// Parse 40 hex bytes (as printed by `git log --format=%H`).
    pub fn from_hex_bytes(hex: &[u8]) -> Result<Self, HashError> {
        if hex.len() != HASH_LEN {
            return Err(HashError::InvalidLength { actual: hex.len() });
        }
        let mut buf = [0u8; HASH_LEN];
        for (i, &b) in hex.iter().enumerate() {
            if !is_hex_symbol(b) {
                return Err(HashError::InvalidHex {
                    position: i,
                    character: b as char,
                });
            }
            buf[i] = b.to_ascii_lowercase();
        }
        Ok(Self(buf))
    }

    /// The hex text as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The hex text.
    pub fn as_str(&self) -> &str {
        // Every byte was checked against the hex alphabet on construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Letter and number counts of this hash.
    pub fn score(&self) -> RarityScore {
        score_hex(&self.0)
    }

    /// Abbreviated form, as used in log lines.
    pub fn short(&self) -> &str {
        &self.as_str()[..8]
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitHash({})", self.short())
    }
}

impl FromStr for CommitHash {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<str> for CommitHash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
