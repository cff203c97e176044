//! A standard playing-card deck with optional `no_std` support.
//!
//! The crate builds a 52-card deck, shuffles and deals it, compares two
//! cards, and persists decks in a small documented binary format. Every
//! operation takes its input by reference and returns new values.
//!
//! # Example
//!
//! ```
//! use deckhand::{Dealer, contains};
//!
//! let mut dealer = Dealer::new(42);
//! let (hand, rest) = dealer.create_and_deal(5);
//! assert_eq!(hand.len(), 5);
//! assert!(hand.iter().all(|card| !contains(&rest, *card)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod battle;
pub mod card;
pub mod codec;
pub mod dealer;
pub mod deck;
pub mod error;
#[cfg(feature = "std")]
pub mod storage;

// Re-export main types
pub use battle::{Winner, battle_cards};
pub use card::{Card, DECK_SIZE, MAX_VALUE, MIN_VALUE, Suit};
pub use dealer::Dealer;
#[cfg(feature = "std")]
pub use deck::{create_and_deal, shuffle};
pub use deck::{
    Deck, Hand, contains, create_and_deal_with, create_deck, deal, deal_one, shuffle_with,
};
#[cfg(feature = "std")]
pub use error::StorageError;
pub use error::{CardError, DecodeError, EncodeError};
#[cfg(feature = "std")]
pub use storage::{load, save};
