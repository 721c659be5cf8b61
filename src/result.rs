//! Play outcomes and final standings.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Effect triggered by a successful play. At most one fires per play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialEffect {
    /// A 10 was played; the pile is removed and the player goes again.
    Clear,
    /// The top four cards share a rank; the pile is removed and the player
    /// goes again.
    FourOfAKind,
    /// A 2 was played. Informational only.
    Wild,
}

impl SpecialEffect {
    /// Whether the effect removes the discard pile.
    #[must_use]
    pub const fn clears_pile(self) -> bool {
        matches!(self, Self::Clear | Self::FourOfAKind)
    }
}

/// What happened when a selection was executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Index of the acting player.
    pub player: usize,
    /// Cards moved to the discard pile.
    pub cards: Vec<Card>,
    /// Whether the play came from the face-down zone.
    pub blind: bool,
    /// Effect triggered by the play, if any.
    pub effect: Option<SpecialEffect>,
    /// Cards picked up as a penalty for a failed blind play.
    pub penalty: Option<usize>,
    /// Cards drawn to refill the hand.
    pub drawn: usize,
    /// Whether the acting player emptied every zone with this play.
    pub finished: bool,
    /// Whether the acting player keeps the turn.
    pub plays_again: bool,
    /// Whether this play ended the game.
    pub game_over: bool,
}

/// Progress through the exchange phase after a confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeStatus {
    /// The player at this index exchanges next.
    Next(usize),
    /// Everyone has exchanged; play starts with this player.
    Complete {
        /// Index of the player who leads.
        first_player: usize,
    },
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standings {
    /// Player indices in finishing order; the first entry ranks highest.
    pub finish_order: Vec<usize>,
    /// The last player holding cards.
    pub loser: Option<usize>,
}

impl Standings {
    /// 1-based finishing place of a player, if they finished.
    #[must_use]
    pub fn place(&self, player: usize) -> Option<usize> {
        self.finish_order
            .iter()
            .position(|&p| p == player)
            .map(|index| index + 1)
    }
}
