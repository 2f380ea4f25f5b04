//! Payout rules applied to a finished hand.
//!
//! Settlement is a pure function of the player's hand, the bet, and the
//! dealer's hand. The bet has already been taken from the player's chips
//! when it was placed, so the payout is everything credited back: zero for a
//! loss, the stake for a push, and the stake plus winnings for a win.

use crate::hand::{BLACKJACK, Hand};
use crate::options::{RoundingMode, TableOptions};
use crate::result::HandOutcome;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Returns the credit for a winning natural: the stake plus the rounded
/// blackjack winnings. With the default 3:2 ratio this is `floor(bet * 2.5)`.
#[must_use]
pub fn blackjack_payout(bet: usize, options: &TableOptions) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for chip amounts"
    )]
    let winnings = (bet as f64) * options.blackjack_pays;
    bet + round_amount(winnings, options.rounding_blackjack)
}

/// Settles one player hand against the dealer's final hand.
///
/// Rules are checked in this order:
/// 1. player over 21: bust, nothing credited
/// 2. player natural, dealer not: blackjack, [`blackjack_payout`]
/// 3. dealer natural, player not: loss
/// 4. player higher, or dealer over 21: win, twice the bet
/// 5. equal totals: push, the bet is returned
/// 6. otherwise: loss
///
/// Returns the outcome and the amount to credit.
#[must_use]
pub fn settle_hand(
    player: &Hand,
    bet: usize,
    dealer: &Hand,
    options: &TableOptions,
) -> (HandOutcome, usize) {
    let player_value = player.value();
    let dealer_value = dealer.value();
    let player_natural = player.is_natural();
    let dealer_natural = dealer.is_natural();

    if player_value > BLACKJACK {
        (HandOutcome::Bust, 0)
    } else if player_natural && !dealer_natural {
        (HandOutcome::Blackjack, blackjack_payout(bet, options))
    } else if !player_natural && dealer_natural {
        (HandOutcome::Lose, 0)
    } else if player_value > dealer_value || dealer_value > BLACKJACK {
        (HandOutcome::Win, bet * 2)
    } else if player_value == dealer_value {
        (HandOutcome::Push, bet)
    } else {
        (HandOutcome::Lose, 0)
    }
}
