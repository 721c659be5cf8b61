use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{IllegalPlay, PlayError};
use crate::player::{Player, Zone};
use crate::result::{PlayOutcome, SpecialEffect};
use crate::rules::{check_against_pile, effect_of};
use crate::table::TableState;

use super::{Game, Phase};

/// Checks the shape of a selection against the acting player's zones.
///
/// Face-down selections are accepted here without looking at the card's rank;
/// a blind card is only compared with the pile once it has been turned over.
fn check_selection(player: &Player, zone: Zone, cards: &[Card]) -> Result<(), IllegalPlay> {
    let Some(first) = cards.first() else {
        return Err(IllegalPlay::EmptySelection);
    };
    if cards.iter().any(|card| card.rank != first.rank) {
        return Err(IllegalPlay::MixedRanks);
    }
    for (index, card) in cards.iter().enumerate() {
        if cards[index + 1..].contains(card) {
            return Err(IllegalPlay::DuplicateCard);
        }
        if !player.holds(card, zone) {
            return Err(IllegalPlay::CardNotFound);
        }
    }

    let required = player.required_zone().ok_or(IllegalPlay::CardNotFound)?;
    if zone != required {
        return Err(IllegalPlay::WrongZone {
            required,
            selected: zone,
        });
    }
    if zone == Zone::FaceDown && cards.len() != 1 {
        return Err(IllegalPlay::BlindPlayCount);
    }
    Ok(())
}

/// Moves the whole discard pile into the acting player's hand.
fn pick_up(table: &mut TableState) -> usize {
    let pile = core::mem::take(&mut table.discard_pile);
    let count = pile.len();
    if let Some(player) = table.current_player_mut() {
        for card in pile {
            player.add_card(card, Zone::Hand);
        }
    }
    count
}

/// Refills the acting player's hand from the draw pile. Players down to their
/// face-down cards no longer draw.
fn replenish_hand(table: &mut TableState, target: usize) -> usize {
    let index = table.current_player_index;
    let Some(player) = table.players.get_mut(index) else {
        return 0;
    };
    if player.is_playing_blind() {
        return 0;
    }

    let mut drawn = 0;
    while player.hand().len() < target {
        let Some(card) = table.draw_pile.pop() else {
            break;
        };
        player.add_card(card, Zone::Hand);
        drawn += 1;
    }
    drawn
}

/// Marks the acting player finished if they are out of cards and ends the game
/// when at most one player is left. Returns `(finished, game_over)`.
fn settle_turn(table: &mut TableState, plays_again: bool) -> (bool, bool) {
    let index = table.current_player_index;
    let finished = table
        .players
        .get_mut(index)
        .is_some_and(Player::check_finished);

    if finished {
        table.finish_order.push(index);
        info!(player = index, place = table.finish_order.len(), "player finished");
    }

    if table.is_game_over() {
        table.advance_phase(Phase::GameOver);
        info!(loser = ?table.standings().and_then(|s| s.loser), "game over");
        return (finished, true);
    }

    if finished || !plays_again {
        table.advance_turn();
    }
    (finished, false)
}

impl Game {
    fn ensure_playing(table: &TableState) -> Result<(), PlayError> {
        if table.phase() != Phase::Playing || table.current_player().is_none() {
            return Err(PlayError::InvalidState);
        }
        Ok(())
    }

    /// Checks whether the acting player may play `cards` from `zone`.
    ///
    /// The cards must be non-empty, share one rank, sit in `zone`, and `zone`
    /// must be the one the player is required to play from. Hand and face-up
    /// selections must also suit the pile top. A face-down selection is a
    /// single card whose rank is only checked when it is played.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase or the
    /// selection is illegal.
    pub fn validate_play(&self, zone: Zone, cards: &[Card]) -> Result<(), PlayError> {
        let table = self.table.lock();
        Self::validate_locked(&table, zone, cards)
    }

    fn validate_locked(table: &TableState, zone: Zone, cards: &[Card]) -> Result<(), PlayError> {
        Self::ensure_playing(table)?;
        let player = table.current_player().ok_or(PlayError::InvalidState)?;
        check_selection(player, zone, cards)?;

        if zone != Zone::FaceDown {
            let top = table.discard_top().map(|card| card.rank);
            check_against_pile(cards[0].rank, top)?;
        }
        Ok(())
    }

    /// Plays `cards` from `zone` for the acting player.
    ///
    /// The cards go onto the discard pile together, then at most one special
    /// effect fires: a 10 or four of a kind on top clears the pile and the
    /// player goes again, a 2 is reported as wild. The hand is then refilled
    /// from the draw pile and the turn passes on unless the player goes again
    /// or the game is over.
    ///
    /// A face-down card is turned over on the pile first and checked against
    /// the card beneath it. If it does not fit, the player picks up the whole
    /// pile including that card and the turn passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase or the
    /// selection is illegal. Nothing changes on error.
    pub fn execute_play(&self, zone: Zone, cards: &[Card]) -> Result<PlayOutcome, PlayError> {
        let mut table = self.table.lock();
        Self::validate_locked(&table, zone, cards)?;

        let index = table.current_player_index;
        let blind = zone == Zone::FaceDown;
        let previous_top = table.discard_top().map(|card| card.rank);
        let rank = cards[0].rank;

        let mut played = Vec::with_capacity(cards.len());
        if let Some(player) = table.current_player_mut() {
            for card in cards {
                if let Some(card) = player.remove_card(card, zone) {
                    played.push(card);
                }
            }
        }
        table.discard_pile.extend_from_slice(&played);

        if blind {
            if let Err(reason) = check_against_pile(rank, previous_top) {
                let picked_up = pick_up(&mut table);
                table.advance_turn();
                debug!(player = index, card = %cards[0], %reason, picked_up, "blind play failed");
                return Ok(PlayOutcome {
                    player: index,
                    cards: played,
                    blind,
                    effect: None,
                    penalty: Some(picked_up),
                    drawn: 0,
                    finished: false,
                    plays_again: false,
                    game_over: false,
                });
            }
        }

        let effect = effect_of(rank, &table.discard_pile);
        if effect.is_some_and(SpecialEffect::clears_pile) {
            table.removed += table.discard_pile.len();
            table.discard_pile.clear();
        }
        let plays_again = effect.is_some_and(SpecialEffect::clears_pile);

        let drawn = replenish_hand(&mut table, self.options.zone_size);
        let (finished, game_over) = settle_turn(&mut table, plays_again);

        debug!(
            player = index,
            rank = %rank,
            count = played.len(),
            blind,
            effect = ?effect,
            "cards played"
        );

        Ok(PlayOutcome {
            player: index,
            cards: played,
            blind,
            effect,
            penalty: None,
            drawn,
            finished,
            plays_again: plays_again && !finished && !game_over,
            game_over,
        })
    }

    /// The acting player takes the whole discard pile into hand and the turn
    /// passes. Returns the number of cards picked up.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase or the discard
    /// pile is empty.
    pub fn pick_up_pile(&self) -> Result<usize, PlayError> {
        let mut table = self.table.lock();
        Self::ensure_playing(&table)?;
        if table.discard_pile.is_empty() {
            return Err(PlayError::EmptyPile);
        }

        let count = pick_up(&mut table);
        debug!(player = table.current_player_index, count, "pile picked up");
        table.advance_turn();

        Ok(count)
    }

    /// Passes the turn to the next active player without playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase or passing is
    /// disabled in [`GameOptions`](crate::GameOptions).
    pub fn pass_turn(&self) -> Result<(), PlayError> {
        let mut table = self.table.lock();
        Self::ensure_playing(&table)?;
        if !self.options.allow_pass {
            return Err(PlayError::PassNotAllowed);
        }

        table.advance_turn();
        Ok(())
    }

    /// Lists the plays the acting player could make right now, one entry per
    /// rank in the required zone holding every card of that rank.
    ///
    /// A player down to face-down cards gets one single-card entry per card,
    /// since those plays are never checked in advance.
    pub fn legal_plays(&self) -> Vec<(Zone, Vec<Card>)> {
        let table = self.table.lock();
        if Self::ensure_playing(&table).is_err() {
            return Vec::new();
        }
        let Some(player) = table.current_player() else {
            return Vec::new();
        };
        let Some(zone) = player.required_zone() else {
            return Vec::new();
        };

        if zone == Zone::FaceDown {
            return player
                .face_down()
                .iter()
                .map(|&card| (zone, alloc::vec![card]))
                .collect();
        }

        let top = table.discard_top().map(|card| card.rank);
        let mut plays: Vec<(Zone, Vec<Card>)> = Vec::new();
        for card in player.cards(zone) {
            if check_against_pile(card.rank, top).is_err() {
                continue;
            }
            match plays.iter_mut().find(|(_, group)| group[0].rank == card.rank) {
                Some((_, group)) => group.push(*card),
                None => plays.push((zone, alloc::vec![*card])),
            }
        }
        plays
    }
}
