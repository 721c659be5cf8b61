//! Read-only views of the table for display.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Phase;
use crate::player::Player;
use crate::result::Standings;
use crate::table::TableState;

/// Zone sizes and status for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    /// Player name.
    pub name: String,
    /// Cards in hand.
    pub hand: usize,
    /// Face-up cards visible to the table.
    pub face_up: Vec<Card>,
    /// Face-down cards.
    pub face_down: usize,
    /// Still taking turns.
    pub is_active: bool,
    /// Emptied every zone.
    pub has_finished: bool,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().into(),
            hand: player.hand().len(),
            face_up: player.face_up().to_vec(),
            face_down: player.face_down().len(),
            is_active: player.is_active,
            has_finished: player.has_finished,
        }
    }
}

/// Copy of the public table state. Changing it has no effect on the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Index of the player to act.
    pub current_player: Option<usize>,
    /// Player chosen to open play.
    pub opening_player: Option<usize>,
    /// Cards left to draw.
    pub draw_pile: usize,
    /// Cards on the discard pile.
    pub discard_pile: usize,
    /// Top card of the discard pile.
    pub discard_top: Option<Card>,
    /// Cards removed from the game by clears.
    pub removed: usize,
    /// Per-player view in seat order.
    pub players: Vec<PlayerSnapshot>,
    /// Finish order and loser once the game is over.
    pub standings: Option<Standings>,
}

impl From<&TableState> for Snapshot {
    fn from(table: &TableState) -> Self {
        Self {
            phase: table.phase(),
            current_player: table
                .current_player()
                .map(|_| table.current_player_index),
            opening_player: table.opening_player,
            draw_pile: table.draw_pile.len(),
            discard_pile: table.discard_pile.len(),
            discard_top: table.discard_top().copied(),
            removed: table.removed,
            players: table.players.iter().map(PlayerSnapshot::from).collect(),
            standings: table.standings(),
        }
    }
}
