//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::Standings;
use crate::snapshot::Snapshot;
use crate::table::TableState;

mod actions;
mod dealer;
mod exchange;
pub mod state;

pub use state::Phase;

use exchange::ExchangeTurn;

/// A Threes rules engine for one table.
///
/// The game owns the table and the random number generator. Every operation
/// takes the table lock once, so the effects of a call are applied in full
/// before the next call is served.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Players, piles, phase, and turn pointer.
    pub table: Mutex<TableState>,
    /// Pre-swap arrangement of the player currently exchanging.
    exchange: Mutex<ExchangeTurn>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use threes::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.initialize(["Alice", "Bob"]).unwrap();
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            table: Mutex::new(TableState::new()),
            exchange: Mutex::new(ExchangeTurn::default()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seats one player per name and shuffles a fresh deck into the draw pile.
    ///
    /// Names must be distinct; that is left to whoever collects them.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have already been dealt.
    pub fn initialize<I, S>(&self, names: I) -> Result<(), SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = self.table.lock();
        if table.phase() != Phase::Setup || table.is_dealt() {
            return Err(SetupError::InvalidState);
        }
        let mut rng = self.rng.lock();
        table.initialize(names, &mut *rng);
        drop(rng);
        tracing::debug!(players = table.players.len(), "table initialized");
        drop(table);
        *self.exchange.lock() = ExchangeTurn::default();
        Ok(())
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.table.lock().phase()
    }

    /// Returns the index of the player to act.
    pub fn current_player(&self) -> Option<usize> {
        let table = self.table.lock();
        table.current_player().map(|_| table.current_player_index)
    }

    /// Returns a copy of the player at `index`.
    pub fn player(&self, index: usize) -> Option<Player> {
        self.table.lock().players.get(index).cloned()
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.table.lock().players.len()
    }

    /// Returns the number of cards left in the draw pile.
    pub fn cards_remaining(&self) -> usize {
        self.table.lock().draw_pile.len()
    }

    /// Returns the discard pile, bottom first.
    pub fn discard_pile(&self) -> Vec<Card> {
        self.table.lock().discard_pile.clone()
    }

    /// Returns whether at most one player is still holding cards.
    pub fn is_game_over(&self) -> bool {
        self.table.lock().is_game_over()
    }

    /// Returns final standings once the game is over.
    pub fn standings(&self) -> Option<Standings> {
        self.table.lock().standings()
    }

    /// Returns a read-only view of the table for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&*self.table.lock())
    }
}
