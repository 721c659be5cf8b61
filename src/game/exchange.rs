use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ExchangeError;
use crate::options::FirstTurn;
use crate::player::Zone;
use crate::result::ExchangeStatus;
use crate::table::TableState;

use super::{Game, Phase};

/// Hand and face-up cards of the exchanging player as they were when their
/// turn began.
#[derive(Debug, Clone, Default)]
pub(super) struct ExchangeTurn {
    hand: Vec<Card>,
    face_up: Vec<Card>,
}

impl ExchangeTurn {
    pub(super) fn begin(&mut self, table: &TableState) {
        if let Some(player) = table.current_player() {
            self.hand = player.hand().to_vec();
            self.face_up = player.face_up().to_vec();
        }
    }
}

impl Game {
    /// Swaps a card between the exchanging player's hand and face-up zones.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the exchange phase, both cards
    /// name the same zone or a face-down zone, or either card is missing from
    /// its stated zone. Nothing changes on error.
    pub fn swap(
        &self,
        card_a: Card,
        zone_a: Zone,
        card_b: Card,
        zone_b: Zone,
    ) -> Result<(), ExchangeError> {
        let mut table = self.table.lock();
        if table.phase() != Phase::Exchange {
            return Err(ExchangeError::InvalidState);
        }
        if zone_a == zone_b || zone_a == Zone::FaceDown || zone_b == Zone::FaceDown {
            return Err(ExchangeError::InvalidSwap);
        }

        let player = table
            .current_player_mut()
            .ok_or(ExchangeError::InvalidState)?;
        if !player.holds(&card_a, zone_a) || !player.holds(&card_b, zone_b) {
            return Err(ExchangeError::CardNotFound);
        }

        if let (Some(a), Some(b)) = (
            player.remove_card(&card_a, zone_a),
            player.remove_card(&card_b, zone_b),
        ) {
            player.add_card(a, zone_b);
            player.add_card(b, zone_a);
        }

        debug!(player = player.name(), %card_a, %card_b, "cards swapped");

        Ok(())
    }

    /// Puts the exchanging player's hand and face-up cards back the way they
    /// were at the start of their turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the exchange phase.
    pub fn reset_exchange(&self) -> Result<(), ExchangeError> {
        let mut table = self.table.lock();
        if table.phase() != Phase::Exchange {
            return Err(ExchangeError::InvalidState);
        }

        let saved = self.exchange.lock();
        let player = table
            .current_player_mut()
            .ok_or(ExchangeError::InvalidState)?;
        player.zone_mut(Zone::Hand).clone_from(&saved.hand);
        player.zone_mut(Zone::FaceUp).clone_from(&saved.face_up);
        drop(saved);

        Ok(())
    }

    /// Keeps the exchanging player's arrangement and hands the exchange to the
    /// next seat.
    ///
    /// After the last seat confirms, the game moves to `Playing` and the turn
    /// goes to the player chosen by [`GameOptions::first_turn`].
    ///
    /// [`GameOptions::first_turn`]: crate::GameOptions::first_turn
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the exchange phase.
    pub fn confirm_exchange(&self) -> Result<ExchangeStatus, ExchangeError> {
        let mut table = self.table.lock();
        if table.phase() != Phase::Exchange || table.players.is_empty() {
            return Err(ExchangeError::InvalidState);
        }

        let next = (table.current_player_index + 1) % table.players.len();
        if next != 0 {
            table.current_player_index = next;
            self.exchange.lock().begin(&table);
            return Ok(ExchangeStatus::Next(next));
        }

        let first_player = match self.options.first_turn {
            FirstTurn::OpeningPlayer => table.opening_player.unwrap_or(0),
            FirstTurn::FirstSeat => 0,
        };
        table.current_player_index = first_player;
        table.advance_phase(Phase::Playing);
        info!(player = first_player, "exchange complete");

        Ok(ExchangeStatus::Complete { first_player })
    }
}
