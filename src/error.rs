use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed hex literal: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    #[error("malformed binary literal: invalid digit {character:?} at position {position}")]
    MalformedBinary { character: char, position: usize },

    /// Bit count of a binary literal is not a multiple of 8.
    #[error("input doesn't represent a whole number of bytes (binary length must be multiple of 8)")]
    Misaligned { bits: usize },

    #[error("failed to read '{}': {source}", .path.display())]
    FileRead { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Unexpected(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
