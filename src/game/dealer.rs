use tracing::{debug, info};

use crate::error::SetupError;
use crate::player::Zone;
use crate::table::{MAX_PLAYERS, MIN_PLAYERS, TableState};

use super::{Game, Phase};

/// Deals `zone_size` rounds into each zone, face-down first, then face-up,
/// then hand. Every player receives a card before anyone receives the next.
fn deal_rounds(table: &mut TableState, zone_size: usize) {
    for zone in [Zone::FaceDown, Zone::FaceUp, Zone::Hand] {
        for _ in 0..zone_size {
            for player in &mut table.players {
                if let Some(card) = table.draw_pile.pop() {
                    player.add_card(card, zone);
                }
            }
        }
    }
}

/// Seat holding the lowest qualifying face-up card; the first one met wins ties.
fn lowest_face_up(table: &TableState) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (index, player) in table.players.iter().enumerate() {
        for card in player.face_up() {
            let Some(value) = card.lowest_deal_value() else {
                continue;
            };
            if best.is_none_or(|(_, lowest)| value < lowest) {
                best = Some((index, value));
            }
        }
    }
    best.map(|(index, _)| index)
}

impl Game {
    /// Deals the initial cards to every player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup, cards were already dealt,
    /// the table does not seat two to four players, the options deal empty
    /// zones, or the draw pile cannot cover every zone of every player. Nothing
    /// is dealt on error.
    pub fn deal(&self) -> Result<(), SetupError> {
        let mut table = self.table.lock();
        if table.phase() != Phase::Setup || table.is_dealt() {
            return Err(SetupError::InvalidState);
        }
        if table.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        let players = table.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(SetupError::PlayerCount {
                found: players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.options.zone_size == 0 {
            return Err(SetupError::ZeroZoneSize);
        }

        let cards_needed = self.options.cards_needed(players);
        if table.draw_pile.len() < cards_needed {
            return Err(SetupError::InsufficientCards);
        }

        deal_rounds(&mut table, self.options.zone_size);
        table.mark_dealt();

        debug!(
            players = table.players.len(),
            remaining = table.draw_pile.len(),
            "cards dealt"
        );

        Ok(())
    }

    /// Picks the opening player from the dealt face-up cards and returns their
    /// index.
    ///
    /// The player showing the lowest card (3 lowest, 2 and 10 never count) opens.
    /// Players are scanned in seat order and each player's face-up cards in
    /// order; the first lowest card found wins ties. When nobody shows a
    /// qualifying card, the first seat opens.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup or cards have not been dealt.
    pub fn determine_first_player(&self) -> Result<usize, SetupError> {
        let mut table = self.table.lock();
        if table.phase() != Phase::Setup || !table.is_dealt() {
            return Err(SetupError::InvalidState);
        }

        let opening = lowest_face_up(&table).unwrap_or(0);
        table.opening_player = Some(opening);
        info!(player = opening, "opening player chosen");

        Ok(opening)
    }

    /// Moves the dealt table into the exchange phase, starting with the first
    /// seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup or the opening player has
    /// not been determined.
    pub fn start_exchange(&self) -> Result<(), SetupError> {
        let mut table = self.table.lock();
        if table.phase() != Phase::Setup || table.opening_player.is_none() {
            return Err(SetupError::InvalidState);
        }

        table.current_player_index = 0;
        table.advance_phase(Phase::Exchange);
        self.exchange.lock().begin(&table);

        Ok(())
    }

    /// Deals, picks the opening player, and opens the exchange phase.
    ///
    /// The phase stays at `Setup` if dealing fails.
    ///
    /// # Errors
    ///
    /// Returns the first setup error encountered.
    pub fn setup(&self) -> Result<usize, SetupError> {
        self.deal()?;
        let opening = self.determine_first_player()?;
        self.start_exchange()?;
        Ok(opening)
    }
}
