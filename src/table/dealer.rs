use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::SettleError;
use crate::result::{PlayerResult, RoundResult};
use crate::settlement::settle_hand;

use super::{GameState, Table};

/// The dealer stands on any total at or above this, soft 17 included.
pub const DEALER_STANDS_ON: u8 = 17;

impl Table {
    /// Dealer plays their hand, drawing while the total is below 17.
    ///
    /// Draws are made against a copy of the deck and committed only when the
    /// dealer finishes, so an empty deck leaves the round untouched.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// runs out while the dealer must draw.
    pub fn dealer_play(&self) -> Result<Vec<Card>, SettleError> {
        let mut state = self.state.lock();
        if *state != GameState::DealerTurn {
            return Err(SettleError::InvalidState);
        }

        let dealer = (*self.dealer.lock()).ok_or(SettleError::InvalidState)?;

        let mut participants = self.participants.lock();
        let mut round = self.round.lock();

        let mut deck = round.deck.clone();
        let mut hand = participants[usize::from(dealer)].hand().clone();
        let mut drawn_cards = Vec::new();

        while hand.value() < DEALER_STANDS_ON {
            let card = deck.draw()?;
            hand.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer draws {} card(s), total {}",
            drawn_cards.len(),
            hand.value()
        );

        round.deck = deck;
        *participants[usize::from(dealer)].hand_mut() = hand;
        *state = GameState::Settlement;

        Ok(drawn_cards)
    }

    /// Settles the round and credits payouts.
    ///
    /// If the dealer has not played yet, [`Table::dealer_play`] runs first.
    /// Each player in turn order is compared to the dealer using
    /// [`settle_hand`]; the dealer's own chips never change.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached dealer turn or
    /// settlement, or the deck runs out during dealer play.
    pub fn settle(&self) -> Result<RoundResult, SettleError> {
        if self.state() == GameState::DealerTurn {
            self.dealer_play()?;
        }

        let mut state = self.state.lock();
        if *state != GameState::Settlement {
            return Err(SettleError::InvalidState);
        }

        let dealer = (*self.dealer.lock()).ok_or(SettleError::InvalidState)?;

        let mut participants = self.participants.lock();
        let round = self.round.lock();

        let dealer_hand = participants[usize::from(dealer)].hand().clone();
        let dealer_value = dealer_hand.value();
        let dealer_bust = dealer_hand.is_bust();
        let dealer_blackjack = dealer_hand.is_natural();

        let mut players = Vec::with_capacity(round.turn_order().len());
        let mut winners = Vec::new();

        for &player_id in round.turn_order() {
            let Some(participant) = participants.get_mut(usize::from(player_id)) else {
                continue;
            };

            let bet = participant.bet();
            let (outcome, payout) =
                settle_hand(participant.hand(), bet, &dealer_hand, &self.options);
            participant.credit(payout);

            if outcome.is_win() {
                winners.push(String::from(participant.name()));
            }

            #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
            let net = payout as isize - bet as isize;

            log::debug!(
                "participant {player_id}: {} (bet {bet}, payout {payout})",
                outcome.tag()
            );

            players.push(PlayerResult {
                player_id,
                name: String::from(participant.name()),
                outcome,
                bet,
                payout,
                value: participant.hand().value(),
                chips: participant.chips(),
                net,
            });
        }
        drop(round);
        drop(participants);

        *state = GameState::Complete;
        drop(state);

        log::info!(
            "round settled, dealer {dealer_value}, {} winner(s)",
            winners.len()
        );

        Ok(RoundResult {
            players,
            winners,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
        })
    }

    /// Abandons the running round and refunds every outstanding bet.
    ///
    /// This is the recovery path after a fatal error such as an empty deck.
    /// Returns `false` if no round was running.
    pub fn abandon_round(&self) -> bool {
        let mut state = self.state.lock();
        if !state.in_round() {
            return false;
        }

        for participant in self.participants.lock().iter_mut() {
            participant.refund_bet();
        }

        *state = GameState::WaitingForPlayers;
        drop(state);

        log::warn!("round abandoned, bets refunded");
        true
    }
}
