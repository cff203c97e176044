//! Two-card comparison.

use core::cmp::Ordering;

use crate::card::Card;

/// Outcome of [`battle_cards`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The first card wins.
    FirstWins,
    /// The second card wins.
    SecondWins,
    /// Both cards have the same suit and value.
    Draw,
}

/// Compares two cards.
///
/// The higher value wins. Equal values are broken by suit, ranked
/// diamonds > hearts > spades > clubs. Only two identical cards draw.
///
/// # Example
///
/// ```
/// use deckhand::{Card, Suit, Winner, battle_cards};
///
/// let seven_hearts = Card::new(Suit::Hearts, 7);
/// let seven_clubs = Card::new(Suit::Clubs, 7);
/// assert_eq!(battle_cards(seven_hearts, seven_clubs), Winner::FirstWins);
/// ```
#[must_use]
pub fn battle_cards(first: Card, second: Card) -> Winner {
    let order = first
        .value
        .cmp(&second.value)
        .then_with(|| first.suit.strength().cmp(&second.suit.strength()));

    match order {
        Ordering::Greater => Winner::FirstWins,
        Ordering::Less => Winner::SecondWins,
        Ordering::Equal => Winner::Draw,
    }
}
