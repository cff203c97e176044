//! Saving and loading decks on the filesystem.
//!
//! Files hold the [`codec`](crate::codec) encoding. Writes create or
//! truncate the target; parent directories are not created.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::card::Card;
use crate::codec;
use crate::deck::Deck;
use crate::error::StorageError;

/// Writes `deck` to the file at `path`, replacing any existing contents.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] without touching the file if a card has a
/// value outside 1..=13, and [`StorageError::Io`] if the file cannot be
/// written (missing parent directory, permissions, full disk, ...).
///
/// # Example
///
/// ```no_run
/// use deckhand::{create_deck, load, save};
///
/// let deck = create_deck();
/// save(&deck, "deck.bin")?;
/// assert_eq!(load("deck.bin")?, deck);
/// # Ok::<(), deckhand::StorageError>(())
/// ```
pub fn save(deck: &[Card], path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();

    let bytes = codec::encode(deck).map_err(|source| StorageError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, bytes).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), cards = deck.len(), "saved deck");
    Ok(())
}

/// Reads a deck previously written by [`save`].
///
/// # Errors
///
/// Returns [`StorageError::NotFound`] if the file does not exist,
/// [`StorageError::Io`] if it cannot be read, and [`StorageError::Corrupt`]
/// if its contents are not a valid deck encoding.
pub fn load(path: impl AsRef<Path>) -> Result<Deck, StorageError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StorageError::NotFound {
            path: path.to_path_buf(),
        },
        _ => StorageError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let deck = codec::decode(&bytes).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "rejected deck file");
        StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), cards = deck.len(), "loaded deck");
    Ok(deck)
}
