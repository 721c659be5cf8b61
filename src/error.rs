//! Error types for game operations.

use thiserror::Error;

use crate::card::Rank;
use crate::player::Zone;

/// Errors from naming a card zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The name does not match any zone.
    #[error("invalid zone name")]
    InvalidZone,
}

/// Errors from parsing a textual card id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The id was empty.
    #[error("empty card id")]
    Empty,
    /// The rank part was not recognised.
    #[error("unknown rank")]
    UnknownRank,
    /// The suit part was not recognised.
    #[error("unknown suit")]
    UnknownSuit,
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game state for this setup step.
    #[error("invalid game state for setup")]
    InvalidState,
    /// No players are seated.
    #[error("no players at the table")]
    NoPlayers,
    /// The table seats fewer than two or more than four players.
    #[error("a table needs {min} to {max} players, found {found}")]
    PlayerCount {
        /// Seated players.
        found: usize,
        /// Fewest players allowed.
        min: usize,
        /// Most players allowed.
        max: usize,
    },
    /// Each zone must be dealt at least one card.
    #[error("zone size must be at least one card")]
    ZeroZoneSize,
    /// Not enough cards in the draw pile to deal every player.
    #[error("not enough cards to deal every player")]
    InsufficientCards,
}

/// Errors that can occur during the exchange phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Invalid game state for exchanging.
    #[error("invalid game state for exchanging")]
    InvalidState,
    /// Both cards come from the same zone, or one is face down.
    #[error("cards must be swapped between hand and face-up")]
    InvalidSwap,
    /// A card is not in the zone it was named from.
    #[error("card not found in the stated zone")]
    CardNotFound,
}

/// Why a selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalPlay {
    /// Nothing was selected.
    #[error("no cards selected")]
    EmptySelection,
    /// The selected cards do not share one rank.
    #[error("selected cards must share a rank")]
    MixedRanks,
    /// The same card was selected more than once.
    #[error("card selected more than once")]
    DuplicateCard,
    /// A selected card is not in the stated zone.
    #[error("card not found in the stated zone")]
    CardNotFound,
    /// The player must play from another zone first.
    #[error("must play from {required:?}, not {selected:?}")]
    WrongZone {
        /// Zone the precedence rule requires.
        required: Zone,
        /// Zone the selection came from.
        selected: Zone,
    },
    /// Blind plays are exactly one face-down card.
    #[error("a blind play is exactly one face-down card")]
    BlindPlayCount,
    /// A 3 only goes on a 2 or a 3.
    #[error("a 3 can only be played on a 2 or a 3")]
    ThreeNeedsLowTop,
    /// The rank is lower than the pile top.
    #[error("{played} is lower than {top}")]
    TooLow {
        /// Rank that was played.
        played: Rank,
        /// Rank on top of the pile.
        top: Rank,
    },
}

/// Errors that can occur during the playing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// The selection breaks the rules.
    #[error("illegal play: {0}")]
    IllegalPlay(#[from] IllegalPlay),
    /// There is no discard pile to pick up.
    #[error("the discard pile is empty")]
    EmptyPile,
    /// Voluntary passing is disabled at this table.
    #[error("passing is not allowed")]
    PassNotAllowed,
}
