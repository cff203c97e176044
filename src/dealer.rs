//! A seeded shuffler.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::{self, Deck, Hand};

/// Shuffles and deals from its own random number generator.
///
/// Two dealers built with the same seed produce the same sequence of
/// shuffles, which makes games and tests reproducible.
///
/// # Example
///
/// ```
/// use deckhand::Dealer;
///
/// let (hand_a, _) = Dealer::new(7).create_and_deal(5);
/// let (hand_b, _) = Dealer::new(7).create_and_deal(5);
/// assert_eq!(hand_a, hand_b);
/// ```
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a dealer with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a dealer seeded from the thread-local generator.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Returns a shuffled copy of `deck`.
    pub fn shuffle(&mut self, deck: &[Card]) -> Deck {
        deck::shuffle_with(deck, &mut self.rng)
    }

    /// Creates a fresh deck, shuffles it and deals `hand_size` cards.
    pub fn create_and_deal(&mut self, hand_size: usize) -> (Hand, Deck) {
        deck::create_and_deal_with(hand_size, &mut self.rng)
    }
}
