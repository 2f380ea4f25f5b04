//! Deck integration tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, Deck, EmptyDeckError, Rank, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted(cards: &[Card]) -> Vec<(Suit, Rank)> {
    let mut keys: Vec<(Suit, Rank)> = cards.iter().map(|c| (c.suit, c.rank)).collect();
    keys.sort_unstable();
    keys
}

#[test]
fn new_deck_is_canonical() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Two));
    assert_eq!(deck.cards()[12], Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[13], Card::new(Suit::Hearts, Rank::Two));
    assert_eq!(deck.cards()[51], Card::new(Suit::Clubs, Rank::Ace));
}

#[test]
fn draw_takes_from_the_top_until_empty() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    deck.shuffle(&mut rng);

    let top = *deck.cards().last().unwrap();
    assert_eq!(deck.draw().unwrap(), top);

    let mut seen = HashSet::from([top]);
    while let Ok(card) = deck.draw() {
        assert!(seen.insert(card), "{card} dealt twice");
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), EmptyDeckError);
    assert!(deck.is_empty());
}

#[test]
fn from_draws_yields_cards_in_order() {
    let first = Card::new(Suit::Hearts, Rank::Ace);
    let second = Card::new(Suit::Clubs, Rank::Nine);
    let mut deck = Deck::from_draws(&[first, second]);

    assert_eq!(deck.draw().unwrap(), first);
    assert_eq!(deck.draw().unwrap(), second);
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn card_display_uses_label_and_symbol() {
    assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(Card::new(Suit::Spades, Rank::Queen).to_string(), "Q♠");
}

proptest! {
    #[test]
    fn shuffle_only_permutes(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(sorted(deck.cards()), sorted(Deck::new().cards()));
    }
}
