//! Classification of the 16-symbol hexadecimal alphabet.
//!
//! A hash draws each character independently from 10 numeric glyphs and 6
//! alphabetic glyphs. Every ASCII byte maps to one of three classes through a
//! 256-entry lookup table built at compile time.

/// Number of symbols in the hash alphabet.
pub const ALPHABET_SIZE: usize = 16;

/// Number of alphabetic symbols (`a` through `f`).
pub const LETTER_SYMBOLS: usize = 6;

/// Number of numeric symbols (`0` through `9`).
pub const NUMBER_SYMBOLS: usize = 10;

/// Class of a single byte with respect to the hash alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// One of `a-f` / `A-F`.
    Letter,
    /// One of `0-9`.
    Number,
    /// Anything outside the alphabet.
    Invalid,
}

const CLASS_TABLE: [SymbolClass; 256] = {
    let mut table = [SymbolClass::Invalid; 256];
    let mut i = 0usize;
    while i < 256 {
        let b = i as u8;
        table[i] = match b {
            b'0'..=b'9' => SymbolClass::Number,
            b'a'..=b'f' | b'A'..=b'F' => SymbolClass::Letter,
            _ => SymbolClass::Invalid,
        };
        i += 1;
    }
    table
};

/// Classify one byte.
#[inline]
pub fn classify(b: u8) -> SymbolClass {
    CLASS_TABLE[b as usize]
}

/// Returns true if `b` belongs to the hash alphabet.
#[inline]
pub fn is_hex_symbol(b: u8) -> bool {
    classify(b) != SymbolClass::Invalid
}
