//! Binary deck encoding.
//!
//! All integers are little-endian.
//!
//! | Offset | Size    | Field                                |
//! |--------|---------|--------------------------------------|
//! | 0      | 4       | magic `b"DECK"`                      |
//! | 4      | 1       | format version ([`FORMAT_VERSION`])  |
//! | 5      | 4       | card count `n` as `u32`              |
//! | 9      | `2 * n` | records: suit tag, value (one byte each) |
//!
//! Suit tags are 0 = diamonds, 1 = hearts, 2 = spades, 3 = clubs.
//! Any sequence of valid cards round-trips, not only full decks. Cards with
//! values outside 1..=13 are refused at encode time, so everything
//! [`encode`] produces is accepted by [`decode`].

use alloc::vec::Vec;

use crate::card::{Card, MAX_VALUE, MIN_VALUE, Suit};
use crate::deck::Deck;
use crate::error::{DecodeError, EncodeError};

/// Magic bytes at the start of every encoded deck.
pub const MAGIC: [u8; 4] = *b"DECK";

/// Current format version.
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = MAGIC.len() + 1 + 4;
const RECORD_LEN: usize = 2;

/// Encodes a sequence of cards.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidValue`] for the first card whose value is
/// outside 1..=13, and [`EncodeError::TooManyCards`] if the sequence is longer
/// than `u32::MAX`.
pub fn encode(deck: &[Card]) -> Result<Vec<u8>, EncodeError> {
    let count = u32::try_from(deck.len()).map_err(|_| EncodeError::TooManyCards(deck.len()))?;
    if let Some(card) = deck.iter().find(|card| !card.is_valid()) {
        return Err(EncodeError::InvalidValue(card.value));
    }

    let mut out = Vec::with_capacity(HEADER_LEN + deck.len() * RECORD_LEN);
    out.extend_from_slice(&MAGIC);
    out.push(FORMAT_VERSION);
    out.extend_from_slice(&count.to_le_bytes());
    for card in deck {
        out.push(card.suit.tag());
        out.push(card.value);
    }
    Ok(out)
}

/// Decodes bytes produced by [`encode`].
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first problem found: wrong magic,
/// unknown version, missing or extra bytes, or an invalid card record.
pub fn decode(bytes: &[u8]) -> Result<Deck, DecodeError> {
    let (magic, rest) = bytes
        .split_first_chunk::<4>()
        .ok_or(DecodeError::Truncated)?;
    if *magic != MAGIC {
        return Err(DecodeError::BadMagic);
    }

    let (&version, rest) = rest.split_first().ok_or(DecodeError::Truncated)?;
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let (count, records) = rest
        .split_first_chunk::<4>()
        .ok_or(DecodeError::Truncated)?;
    let count = u32::from_le_bytes(*count) as usize;

    let expected = count
        .checked_mul(RECORD_LEN)
        .ok_or(DecodeError::Truncated)?;
    if records.len() < expected {
        return Err(DecodeError::Truncated);
    }
    if records.len() > expected {
        return Err(DecodeError::TrailingBytes);
    }

    records
        .chunks_exact(RECORD_LEN)
        .map(|record| decode_card(record[0], record[1]))
        .collect()
}

fn decode_card(tag: u8, value: u8) -> Result<Card, DecodeError> {
    let suit = Suit::from_tag(tag).ok_or(DecodeError::InvalidSuit(tag))?;
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(DecodeError::InvalidValue(value));
    }
    Ok(Card::new(suit, value))
}
