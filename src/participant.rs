//! Participants seated at the table.

use alloc::string::String;

use crate::hand::Hand;

/// Identifier of a participant: its seat index, assigned in join order.
pub type ParticipantId = u8;

/// A player (or the dealer) with a name, a chip stack, a hand, and a bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    chips: usize,
    bet: usize,
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand and no bet.
    #[must_use]
    pub const fn new(id: ParticipantId, name: String, chips: usize) -> Self {
        Self {
            id,
            name,
            chips,
            bet: 0,
            hand: Hand::new(),
        }
    }

    /// Returns the participant's seat index.
    #[must_use]
    pub const fn id(&self) -> ParticipantId {
        self.id
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chips not currently staked.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the bet for the current round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns a mutable reference to the participant's hand.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Stakes `amount` for this round, clamped to the available chips.
    ///
    /// The clamped amount is moved from the chip stack into the bet and
    /// returned.
    pub fn place_bet(&mut self, amount: usize) -> usize {
        let amount = amount.min(self.chips);
        self.chips -= amount;
        self.bet = amount;
        amount
    }

    /// Credits a payout to the chip stack.
    pub const fn credit(&mut self, amount: usize) {
        self.chips += amount;
    }

    /// Returns the current bet to the chip stack.
    pub const fn refund_bet(&mut self) {
        self.chips += self.bet;
        self.bet = 0;
    }

    /// Clears the hand and bet. Chips are untouched.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.bet = 0;
    }
}
