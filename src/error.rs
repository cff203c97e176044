//! Error types for deck operations.

#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Value outside 1..=13.
    #[error("card value {0} is outside 1..=13")]
    InvalidValue(u8),
}

/// Errors that can occur when encoding a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A card carries a value outside 1..=13.
    #[error("card value {0} is outside 1..=13")]
    InvalidValue(u8),
    /// The sequence holds more cards than the count field can express.
    #[error("{0} cards exceed the format limit")]
    TooManyCards(usize),
}

/// Errors that can occur when decoding a serialized deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The data does not start with the deck magic bytes.
    #[error("not a deck file")]
    BadMagic,
    /// The format version is not supported.
    #[error("unsupported deck format version {0}")]
    UnsupportedVersion(u8),
    /// The data ends before the header or the last record.
    #[error("deck data is truncated")]
    Truncated,
    /// Extra bytes follow the last record.
    #[error("unexpected bytes after the last card")]
    TrailingBytes,
    /// A record carries an unknown suit tag.
    #[error("unknown suit tag {0}")]
    InvalidSuit(u8),
    /// A record carries a value outside 1..=13.
    #[error("card value {0} is outside 1..=13")]
    InvalidValue(u8),
}

/// Errors that can occur when saving or loading a deck file.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file does not exist.
    #[error("deck file {} not found", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The file could not be read or written.
    #[error("i/o error on deck file {}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The deck holds a card that cannot be written.
    #[error("cannot write deck file {}", path.display())]
    Encode {
        /// Path of the file.
        path: PathBuf,
        /// Why the deck could not be encoded.
        source: EncodeError,
    },
    /// The file exists but does not hold a valid deck.
    #[error("deck file {} is corrupt", path.display())]
    Corrupt {
        /// Path of the file.
        path: PathBuf,
        /// What was wrong with the contents.
        source: DecodeError,
    },
}

#[cfg(feature = "std")]
impl StorageError {
    /// Returns the path of the file involved.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Encode { path, .. }
            | Self::Corrupt { path, .. } => path,
        }
    }
}
