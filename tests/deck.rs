//! Deck construction, shuffle and deal tests.

use std::collections::HashSet;

use deckhand::{
    Card, CardError, DECK_SIZE, Dealer, Suit, contains, create_and_deal, create_deck, deal,
    deal_one, shuffle, shuffle_with,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, value: u8) -> Card {
    Card::new(suit, value)
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_unstable();
    cards
}

#[test]
fn fresh_deck_is_complete_and_ordered() {
    let deck = create_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        for value in 1..=13u8 {
            assert_eq!(deck[i * 13 + usize::from(value) - 1], card(suit, value));
        }
    }
    assert_eq!(create_deck(), deck);
    assert!(deck.is_sorted());
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let deck = create_deck();
    let shuffled = shuffle(&deck);

    assert_eq!(shuffled.len(), deck.len());
    assert_eq!(sorted(&shuffled), sorted(&deck));
    // Input untouched.
    assert_eq!(deck, create_deck());
}

#[test]
fn shuffle_reorders_a_full_deck() {
    let deck = create_deck();
    // A 52-card shuffle landing on the identity is a 1 in 52! event; three
    // in a row never happens.
    assert!((0..3).any(|_| shuffle(&deck) != deck));
}

#[test]
fn shuffle_of_tiny_decks() {
    assert!(shuffle(&[]).is_empty());
    let single = [card(Suit::Spades, 4)];
    assert_eq!(shuffle(&single), single.to_vec());
}

#[test]
fn seeded_dealers_are_reproducible() {
    let deck = create_deck();
    let mut a = Dealer::new(99);
    let mut b = Dealer::new(99);
    assert_eq!(a.shuffle(&deck), b.shuffle(&deck));
    assert_eq!(a.create_and_deal(13), b.create_and_deal(13));

    let mut rng_a = ChaCha8Rng::seed_from_u64(5);
    let mut rng_b = ChaCha8Rng::seed_from_u64(5);
    assert_eq!(shuffle_with(&deck, &mut rng_a), shuffle_with(&deck, &mut rng_b));
}

#[test]
fn deal_splits_a_prefix() {
    let deck = create_deck();
    let (hand, rest) = deal(&deck, 3);
    assert_eq!(
        hand,
        vec![
            card(Suit::Diamonds, 1),
            card(Suit::Diamonds, 2),
            card(Suit::Diamonds, 3)
        ]
    );
    assert_eq!(rest.len(), 49);
    assert_eq!(rest[0], card(Suit::Diamonds, 4));
}

#[test]
fn deal_clamps_size() {
    let deck = create_deck();

    let (hand, rest) = deal(&deck, 100);
    assert_eq!(hand, deck);
    assert!(rest.is_empty());

    let (hand, rest) = deal(&deck, 0);
    assert!(hand.is_empty());
    assert_eq!(rest, deck);

    let (hand, rest) = deal(&[], 5);
    assert!(hand.is_empty());
    assert!(rest.is_empty());
}

#[test]
fn deal_one_takes_the_top_card() {
    let deck = create_deck();
    let (hand, rest) = deal_one(&deck);
    assert_eq!(hand, vec![card(Suit::Diamonds, 1)]);
    assert_eq!(rest.len(), DECK_SIZE - 1);
}

#[test]
fn create_and_deal_five() {
    let (hand, rest) = create_and_deal(5);
    assert_eq!(hand.len(), 5);
    assert_eq!(rest.len(), 47);

    for c in &hand {
        assert!(!contains(&rest, *c), "{c} dealt twice");
    }

    let mut all = hand;
    all.extend(rest);
    assert_eq!(sorted(&all), sorted(&create_deck()));
}

#[test]
fn contains_uses_structural_equality() {
    let hand = vec![card(Suit::Hearts, 12), card(Suit::Clubs, 2)];
    assert!(contains(&hand, Card::new(Suit::Hearts, 12)));
    assert!(!contains(&hand, card(Suit::Spades, 12)));
    assert!(!contains(&hand, card(Suit::Hearts, 11)));
    assert!(!contains(&[], card(Suit::Hearts, 12)));
}

#[test]
fn card_validation_and_display() {
    assert_eq!(Card::try_new(Suit::Clubs, 1), Ok(card(Suit::Clubs, 1)));
    assert_eq!(
        Card::try_new(Suit::Clubs, 0),
        Err(CardError::InvalidValue(0))
    );
    assert_eq!(
        Card::try_new(Suit::Clubs, 14),
        Err(CardError::InvalidValue(14))
    );
    assert!(!card(Suit::Hearts, 0).is_valid());

    assert_eq!(card(Suit::Spades, 1).to_string(), "ace of spades");
    assert_eq!(card(Suit::Hearts, 7).to_string(), "7 of hearts");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "queen of diamonds");
}

proptest! {
    /// Shuffling any subsequence of a deck yields a permutation of it.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), len in 0usize..=DECK_SIZE) {
        let deck: Vec<Card> = create_deck().into_iter().take(len).collect();
        let shuffled = Dealer::new(seed).shuffle(&deck);
        prop_assert_eq!(shuffled.len(), deck.len());
        prop_assert_eq!(sorted(&shuffled), sorted(&deck));
    }

    /// hand ++ rest reconstructs the input, with the requested lengths.
    #[test]
    fn prop_deal_concatenates_back(seed in any::<u64>(), size in 0usize..=60) {
        let deck = Dealer::new(seed).shuffle(&create_deck());
        let (hand, rest) = deal(&deck, size);

        prop_assert_eq!(hand.len(), size.min(DECK_SIZE));
        prop_assert_eq!(rest.len(), DECK_SIZE - hand.len());

        let mut joined = hand;
        joined.extend(rest);
        prop_assert_eq!(joined, deck);
    }
}
