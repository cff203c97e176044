//! Card types.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Variants are declared in deck order: a fresh deck starts with diamonds
/// and ends with clubs. `Ord` follows that order; battle strength is
/// [`Suit::strength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Tie-break strength of the suit: diamonds 3, hearts 2, spades 1, clubs 0.
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Diamonds => 3,
            Self::Hearts => 2,
            Self::Spades => 1,
            Self::Clubs => 0,
        }
    }

    /// Returns whether this suit ranks strictly above `other`.
    ///
    /// ```
    /// use deckhand::Suit;
    ///
    /// assert!(Suit::Hearts.outranks(Suit::Clubs));
    /// assert!(!Suit::Spades.outranks(Suit::Spades));
    /// ```
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.strength() > other.strength()
    }

    /// Lowercase plural name, e.g. `"diamonds"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
            Self::Clubs => "clubs",
        }
    }

    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::Diamonds => 0,
            Self::Hearts => 1,
            Self::Spades => 2,
            Self::Clubs => 3,
        }
    }

    pub(crate) const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Diamonds),
            1 => Some(Self::Hearts),
            2 => Some(Self::Spades),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowest card value (ace).
pub const MIN_VALUE: u8 = 1;

/// Highest card value (king).
pub const MAX_VALUE: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * MAX_VALUE as usize;

/// A playing card.
///
/// Cards order by suit and then value, the order of [`create_deck`](crate::create_deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The value of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Use [`Card::try_new`]
    /// when the value comes from outside the program.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }

    /// Creates a new card, rejecting values outside 1..=13.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `value` is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{Card, CardError, Suit};
    ///
    /// assert!(Card::try_new(Suit::Hearts, 13).is_ok());
    /// assert_eq!(Card::try_new(Suit::Hearts, 14), Err(CardError::InvalidValue(14)));
    /// ```
    pub const fn try_new(suit: Suit, value: u8) -> Result<Self, CardError> {
        if value < MIN_VALUE || value > MAX_VALUE {
            return Err(CardError::InvalidValue(value));
        }
        Ok(Self { suit, value })
    }

    /// Returns whether the value lies in 1..=13.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.value >= MIN_VALUE && self.value <= MAX_VALUE
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            1 => write!(f, "ace of {}", self.suit),
            11 => write!(f, "jack of {}", self.suit),
            12 => write!(f, "queen of {}", self.suit),
            13 => write!(f, "king of {}", self.suit),
            v => write!(f, "{v} of {}", self.suit),
        }
    }
}
