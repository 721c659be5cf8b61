//! A rules engine for Threes, a shedding card game for two to four players
//! with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a table from the deal through
//! the hand/face-up exchange and the playing phase until one player is left
//! holding cards.
//!
//! # Example
//!
//! ```no_run
//! use threes::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.initialize(["Alice", "Bob", "Cara"]).unwrap();
//! game.setup().unwrap();
//! while game.phase() == threes::Phase::Exchange {
//!     game.confirm_exchange().unwrap();
//! }
//! if let Some((zone, cards)) = game.legal_plays().into_iter().next() {
//!     game.execute_play(zone, &cards).unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod rules;
pub mod snapshot;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, build_deck, shuffle};
pub use error::{CardParseError, ExchangeError, IllegalPlay, PlayError, SetupError, ZoneError};
pub use game::{Game, Phase};
pub use options::{FirstTurn, GameOptions};
pub use player::{Player, Zone};
pub use result::{ExchangeStatus, PlayOutcome, SpecialEffect, Standings};
pub use snapshot::{PlayerSnapshot, Snapshot};
pub use table::{MAX_PLAYERS, MIN_PLAYERS, TableState};
