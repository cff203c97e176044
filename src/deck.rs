//! Deck construction, shuffling and dealing.
//!
//! None of these functions mutate their input: each takes a slice and
//! returns freshly allocated vectors.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_VALUE, MIN_VALUE, Suit};

/// An ordered sequence of cards.
pub type Deck = Vec<Card>;

/// Cards taken from the front of a deck.
pub type Hand = Vec<Card>;

/// Creates a standard 52-card deck.
///
/// Cards are ordered by suit (diamonds, hearts, spades, clubs) and then by
/// ascending value within each suit.
///
/// # Example
///
/// ```
/// use deckhand::{Card, Suit, create_deck};
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], Card::new(Suit::Diamonds, 1));
/// assert_eq!(deck[51], Card::new(Suit::Clubs, 13));
/// ```
#[must_use]
pub fn create_deck() -> Deck {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for value in MIN_VALUE..=MAX_VALUE {
            cards.push(Card::new(suit, value));
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `deck` using the given random source.
pub fn shuffle_with<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Deck {
    let mut cards = deck.to_vec();
    cards.shuffle(rng);
    cards
}

/// Returns a uniformly shuffled copy of `deck`.
///
/// Uses the thread-local generator, seeded from the operating system. Use
/// [`shuffle_with`] or a [`Dealer`](crate::Dealer) for reproducible results.
#[cfg(feature = "std")]
#[must_use]
pub fn shuffle(deck: &[Card]) -> Deck {
    shuffle_with(deck, &mut rand::rng())
}

/// Splits `deck` into the first `size` cards and the rest.
///
/// If `size` is at least the deck length, the hand is the whole deck and
/// the rest is empty.
///
/// # Example
///
/// ```
/// use deckhand::{create_deck, deal};
///
/// let deck = create_deck();
/// let (hand, rest) = deal(&deck, 5);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(rest.len(), 47);
/// assert_eq!(hand[..], deck[..5]);
/// ```
#[must_use]
pub fn deal(deck: &[Card], size: usize) -> (Hand, Deck) {
    let (hand, rest) = deck.split_at(size.min(deck.len()));
    (hand.to_vec(), rest.to_vec())
}

/// Deals a single card: shorthand for `deal(deck, 1)`.
#[must_use]
pub fn deal_one(deck: &[Card]) -> (Hand, Deck) {
    deal(deck, 1)
}

/// Creates a fresh deck, shuffles it with `rng` and deals `hand_size` cards.
pub fn create_and_deal_with<R: Rng + ?Sized>(hand_size: usize, rng: &mut R) -> (Hand, Deck) {
    tracing::trace!(hand_size, "dealing from a fresh deck");
    deal(&shuffle_with(&create_deck(), rng), hand_size)
}

/// Creates a fresh deck, shuffles it and deals `hand_size` cards.
#[cfg(feature = "std")]
#[must_use]
pub fn create_and_deal(hand_size: usize) -> (Hand, Deck) {
    create_and_deal_with(hand_size, &mut rand::rng())
}

/// Returns whether `hand` holds a card equal to `card`.
#[must_use]
pub fn contains(hand: &[Card], card: Card) -> bool {
    hand.contains(&card)
}
