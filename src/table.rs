//! Aggregate table state shared by every engine operation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use tracing::info;

use crate::card::{Card, build_deck, shuffle};
use crate::game::Phase;
use crate::player::Player;
use crate::result::Standings;

/// Fewest players a table can be dealt for.
pub const MIN_PLAYERS: usize = 2;
/// Most players a table can be dealt for.
pub const MAX_PLAYERS: usize = 4;

/// Players, turn pointer, phase, and both piles.
///
/// Every card of the deck lives in exactly one place: a player's zone, the draw
/// pile, the discard pile, or the count of cards removed by pile clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Seated players in turn order.
    pub players: Vec<Player>,
    /// Index of the player to act.
    pub current_player_index: usize,
    /// Draw pile; the last element is the top.
    pub draw_pile: Vec<Card>,
    /// Discard pile; the last element is the most recently played card.
    pub discard_pile: Vec<Card>,
    /// Cards permanently taken out of play by pile clears.
    pub removed: usize,
    /// Player chosen to open play, once determined.
    pub opening_player: Option<usize>,
    /// Players in the order they emptied all their zones.
    pub finish_order: Vec<usize>,
    phase: Phase,
    dealt: bool,
}

impl TableState {
    /// Creates an empty table in the `Setup` phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            removed: 0,
            opening_player: None,
            finish_order: Vec::new(),
            phase: Phase::Setup,
            dealt: false,
        }
    }

    /// Seats one player per name and fills the draw pile with a freshly
    /// shuffled deck. Names are expected to be distinct.
    pub fn initialize<I, S, R>(&mut self, names: I, rng: &mut R)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng + ?Sized,
    {
        *self = Self::new();
        self.players = names.into_iter().map(Player::new).collect();
        self.draw_pile = shuffle(&build_deck(), rng);
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves the phase forward. Requests to move backwards are ignored.
    pub(crate) fn advance_phase(&mut self, phase: Phase) {
        if phase > self.phase {
            info!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }

    pub(crate) const fn is_dealt(&self) -> bool {
        self.dealt
    }

    pub(crate) const fn mark_dealt(&mut self) {
        self.dealt = true;
    }

    /// Returns the player to act, if any are seated.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub(crate) fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current_player_index)
    }

    /// Moves the turn to the next active player, scanning forward and wrapping.
    ///
    /// Leaves the pointer alone when no other player is active.
    pub fn advance_turn(&mut self) {
        let count = self.players.len();
        for step in 1..count {
            let index = (self.current_player_index + step) % count;
            if self.players[index].is_active {
                self.current_player_index = index;
                return;
            }
        }
    }

    /// Number of players still taking turns.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active).count()
    }

    /// Returns whether at most one player remains active.
    ///
    /// Callers move the phase to `GameOver` when this turns true.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.active_count() <= 1
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Finish order and loser, once the game is over.
    #[must_use]
    pub fn standings(&self) -> Option<Standings> {
        if self.phase != Phase::GameOver {
            return None;
        }
        let mut active = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active)
            .map(|(i, _)| i);
        let loser = match (active.next(), active.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        };
        Some(Standings {
            finish_order: self.finish_order.clone(),
            loser,
        })
    }

    /// Counts every card still in play plus those removed by clears.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::card_count).sum::<usize>()
            + self.draw_pile.len()
            + self.discard_pile.len()
            + self.removed
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DECK_SIZE;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn table(names: &[&str]) -> TableState {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut table = TableState::new();
        table.initialize(names.iter().copied(), &mut rng);
        table
    }

    #[test]
    fn initialize_seats_players_and_fills_draw_pile() {
        let table = table(&["Alice", "Bob", "Cara"]);
        assert_eq!(table.players.len(), 3);
        assert_eq!(table.players[1].name(), "Bob");
        assert_eq!(table.draw_pile.len(), DECK_SIZE);
        assert!(table.discard_pile.is_empty());
        assert_eq!(table.current_player_index, 0);
        assert_eq!(table.phase(), Phase::Setup);
        assert_eq!(table.total_cards(), DECK_SIZE);
    }

    #[test]
    fn current_player_is_none_without_players() {
        let table = TableState::new();
        assert!(table.current_player().is_none());
        assert!(table.is_game_over());
    }

    #[test]
    fn advance_turn_skips_inactive_players() {
        let mut table = table(&["Alice", "Bob", "Cara", "Dan"]);
        table.players[1].is_active = false;
        table.advance_turn();
        assert_eq!(table.current_player_index, 2);
        table.advance_turn();
        table.advance_turn();
        assert_eq!(table.current_player_index, 0);
    }

    #[test]
    fn advance_turn_stays_put_when_alone() {
        let mut table = table(&["Alice", "Bob"]);
        table.players[1].is_active = false;
        table.advance_turn();
        assert_eq!(table.current_player_index, 0);
        assert!(table.is_game_over());
    }

    #[test]
    fn phase_never_moves_backwards() {
        let mut table = table(&["Alice", "Bob"]);
        table.advance_phase(Phase::Playing);
        table.advance_phase(Phase::Exchange);
        assert_eq!(table.phase(), Phase::Playing);
    }
}
