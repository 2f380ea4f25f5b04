//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::participant::ParticipantId;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player wins with a natural the dealer does not match.
    Blackjack,
    /// Push (tie).
    Push,
    /// Player loses to the dealer's higher value or natural.
    Lose,
    /// Player went over 21.
    Bust,
}

impl HandOutcome {
    /// Returns the display tag for the outcome.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Blackjack => "blackjack-win",
            Self::Push => "push",
            Self::Lose => "loss",
            Self::Bust => "bust",
        }
    }

    /// Returns whether the outcome counts as a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The participant ID.
    pub player_id: ParticipantId,
    /// The participant's name.
    pub name: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount.
    pub bet: usize,
    /// The payout credited back to the chip stack (stake included).
    pub payout: usize,
    /// The player's final hand value.
    pub value: u8,
    /// The chip balance after the payout.
    pub chips: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player who bet, in turn order.
    pub players: Vec<PlayerResult>,
    /// Names of the players tagged win or blackjack-win, in turn order.
    pub winners: Vec<String>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_blackjack: bool,
}
