//! Payout rule tests.

use bjtable::settlement::{blackjack_payout, settle_hand};
use bjtable::{Card, Hand, HandOutcome, Rank, RoundingMode, Suit, TableOptions};

fn hand(ranks: &[Rank]) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(Suit::Hearts, r)).collect();
    Hand::from_cards(&cards)
}

#[test]
fn natural_pays_two_and_a_half_floored() {
    let options = TableOptions::default();
    let player = hand(&[Rank::Ace, Rank::King]);
    let dealer = hand(&[Rank::Ten, Rank::Nine]);

    assert_eq!(
        settle_hand(&player, 10, &dealer, &options),
        (HandOutcome::Blackjack, 25)
    );
    assert_eq!(
        settle_hand(&player, 15, &dealer, &options),
        (HandOutcome::Blackjack, 37)
    );
}

#[test]
fn natural_against_dealer_natural_pushes() {
    let options = TableOptions::default();
    let player = hand(&[Rank::Ace, Rank::Queen]);
    let dealer = hand(&[Rank::King, Rank::Ace]);

    assert_eq!(
        settle_hand(&player, 10, &dealer, &options),
        (HandOutcome::Push, 10)
    );
}

#[test]
fn dealer_natural_beats_three_card_21() {
    let options = TableOptions::default();
    let player = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    let dealer = hand(&[Rank::Ace, Rank::Jack]);

    assert_eq!(
        settle_hand(&player, 10, &dealer, &options),
        (HandOutcome::Lose, 0)
    );
}

#[test]
fn dealer_bust_pays_even_money() {
    let options = TableOptions::default();
    let player = hand(&[Rank::Ten, Rank::Queen]);
    let dealer = hand(&[Rank::Ten, Rank::Six, Rank::Six]);

    assert_eq!(
        settle_hand(&player, 10, &dealer, &options),
        (HandOutcome::Win, 20)
    );
}

#[test]
fn equal_totals_return_the_stake() {
    let options = TableOptions::default();
    let player = hand(&[Rank::Ten, Rank::Nine]);
    let dealer = hand(&[Rank::Nine, Rank::Ten]);

    assert_eq!(
        settle_hand(&player, 40, &dealer, &options),
        (HandOutcome::Push, 40)
    );
}

#[test]
fn lower_total_loses() {
    let options = TableOptions::default();
    let player = hand(&[Rank::Ten, Rank::Eight]);
    let dealer = hand(&[Rank::Nine, Rank::Jack]);

    assert_eq!(
        settle_hand(&player, 50, &dealer, &options),
        (HandOutcome::Lose, 0)
    );
}

#[test]
fn player_bust_loses_even_when_dealer_busts() {
    let options = TableOptions::default();
    let player = hand(&[Rank::Ten, Rank::Two, Rank::Queen]);
    let dealer = hand(&[Rank::Ten, Rank::Six, Rank::King]);

    let (outcome, payout) = settle_hand(&player, 10, &dealer, &options);
    assert_eq!(outcome, HandOutcome::Bust);
    assert_eq!(payout, 0);
    assert_eq!(outcome.tag(), "bust");
    assert!(!outcome.is_win());
}

#[test]
fn blackjack_payout_follows_options() {
    let options = TableOptions::default()
        .with_blackjack_pays(1.2)
        .with_rounding_blackjack(RoundingMode::Up);
    assert_eq!(blackjack_payout(10, &options), 22);
    assert_eq!(blackjack_payout(7, &options), 16);

    let default = TableOptions::default();
    assert_eq!(blackjack_payout(1, &default), 2);
    assert_eq!(blackjack_payout(0, &default), 0);
}

#[test]
fn outcome_tags() {
    assert_eq!(HandOutcome::Win.tag(), "win");
    assert_eq!(HandOutcome::Blackjack.tag(), "blackjack-win");
    assert_eq!(HandOutcome::Push.tag(), "push");
    assert_eq!(HandOutcome::Lose.tag(), "loss");
}
