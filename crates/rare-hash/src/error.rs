/// Errors produced when parsing a commit hash.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid hash length: expected 40 hex characters, got {actual}")]
    InvalidLength { actual: usize },
}
