//! Players and their three card zones.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use tracing::warn;

use crate::card::Card;
use crate::error::ZoneError;

/// One of a player's card collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// Cards held in hand.
    Hand,
    /// Cards on the table, visible to everyone.
    FaceUp,
    /// Cards on the table, hidden from everyone including the owner.
    FaceDown,
}

impl FromStr for Zone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hand" => Ok(Self::Hand),
            "faceUp" | "face_up" | "face-up" => Ok(Self::FaceUp),
            "faceDown" | "face_down" | "face-down" => Ok(Self::FaceDown),
            _ => {
                warn!(zone = s, "unknown zone name");
                Err(ZoneError::InvalidZone)
            }
        }
    }
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    face_up: Vec<Card>,
    face_down: Vec<Card>,
    /// Still taking turns.
    pub is_active: bool,
    /// Emptied every zone.
    pub has_finished: bool,
}

impl Player {
    /// Creates an active player with empty zones.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            face_up: Vec::new(),
            face_down: Vec::new(),
            is_active: true,
            has_finished: false,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in a zone.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::Hand => &self.hand,
            Zone::FaceUp => &self.face_up,
            Zone::FaceDown => &self.face_down,
        }
    }

    pub(crate) const fn zone_mut(&mut self, zone: Zone) -> &mut Vec<Card> {
        match zone {
            Zone::Hand => &mut self.hand,
            Zone::FaceUp => &mut self.face_up,
            Zone::FaceDown => &mut self.face_down,
        }
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the face-up cards.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        &self.face_up
    }

    /// Returns the face-down cards.
    #[must_use]
    pub fn face_down(&self) -> &[Card] {
        &self.face_down
    }

    /// Appends a card to a zone.
    pub fn add_card(&mut self, card: Card, zone: Zone) {
        self.zone_mut(zone).push(card);
    }

    /// Removes the card from a zone, or returns `None` if it is not there.
    pub fn remove_card(&mut self, card: &Card, zone: Zone) -> Option<Card> {
        let cards = self.zone_mut(zone);
        let index = cards.iter().position(|c| c == card)?;
        Some(cards.remove(index))
    }

    /// Returns whether the zone holds the card.
    #[must_use]
    pub fn holds(&self, card: &Card, zone: Zone) -> bool {
        self.cards(zone).contains(card)
    }

    /// Total cards across all three zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.face_up.len() + self.face_down.len()
    }

    /// Returns whether the player is out of cards, marking them finished and
    /// inactive if so.
    pub fn check_finished(&mut self) -> bool {
        let finished = self.card_count() == 0;
        if finished {
            self.has_finished = true;
            self.is_active = false;
        }
        finished
    }

    /// The zone the player must play from: hand, then face-up, then face-down.
    ///
    /// Returns `None` once every zone is empty.
    #[must_use]
    pub fn required_zone(&self) -> Option<Zone> {
        if !self.hand.is_empty() {
            Some(Zone::Hand)
        } else if !self.face_up.is_empty() {
            Some(Zone::FaceUp)
        } else if !self.face_down.is_empty() {
            Some(Zone::FaceDown)
        } else {
            None
        }
    }

    /// Whether the player has reached their face-down cards and stopped drawing.
    #[must_use]
    pub fn is_playing_blind(&self) -> bool {
        self.hand.is_empty() && self.face_up.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn add_and_remove_by_identity() {
        let mut player = Player::new("Alice");
        player.add_card(card(Suit::Hearts, Rank::Five), Zone::Hand);
        player.add_card(card(Suit::Clubs, Rank::Five), Zone::Hand);

        assert_eq!(
            player.remove_card(&card(Suit::Clubs, Rank::Five), Zone::Hand),
            Some(card(Suit::Clubs, Rank::Five))
        );
        assert_eq!(player.hand(), &[card(Suit::Hearts, Rank::Five)]);
    }

    #[test]
    fn remove_missing_card_changes_nothing() {
        let mut player = Player::new("Bob");
        player.add_card(card(Suit::Spades, Rank::Ace), Zone::FaceUp);
        let before = player.clone();

        assert_eq!(player.remove_card(&card(Suit::Spades, Rank::Ace), Zone::Hand), None);
        assert_eq!(player, before);
    }

    #[test]
    fn zone_names_parse() {
        assert_eq!("hand".parse::<Zone>(), Ok(Zone::Hand));
        assert_eq!("faceUp".parse::<Zone>(), Ok(Zone::FaceUp));
        assert_eq!("face_down".parse::<Zone>(), Ok(Zone::FaceDown));
        assert_eq!("pocket".parse::<Zone>(), Err(ZoneError::InvalidZone));
    }

    #[test]
    fn finishing_is_idempotent() {
        let mut player = Player::new("Cara");
        player.add_card(card(Suit::Diamonds, Rank::Nine), Zone::FaceDown);
        assert!(!player.check_finished());
        assert!(player.is_active);

        player.remove_card(&card(Suit::Diamonds, Rank::Nine), Zone::FaceDown);
        assert!(player.check_finished());
        assert!(player.check_finished());
        assert!(!player.is_active);
        assert!(player.has_finished);
    }

    #[test]
    fn precedence_walks_hand_face_up_face_down() {
        let mut player = Player::new("Dan");
        player.add_card(card(Suit::Clubs, Rank::Four), Zone::FaceDown);
        assert_eq!(player.required_zone(), Some(Zone::FaceDown));
        assert!(player.is_playing_blind());

        player.add_card(card(Suit::Clubs, Rank::Six), Zone::FaceUp);
        assert_eq!(player.required_zone(), Some(Zone::FaceUp));

        player.add_card(card(Suit::Clubs, Rank::Seven), Zone::Hand);
        assert_eq!(player.required_zone(), Some(Zone::Hand));
        assert_eq!(player.card_count(), 3);
    }
}
