//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CardParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol used in card ids.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '♠' | 'S' | 's' => Some(Self::Spades),
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank. Suits never matter for play, only ranks do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// 2, wild.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10, clears the pile.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the label used in card ids ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(label))
    }

    /// Numeric value used when comparing a play against the pile top.
    ///
    /// Number cards count their face value, court cards and the ace rank above
    /// them, and the 2 ranks highest of all.
    #[must_use]
    pub const fn play_value(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
            Self::Two => 15,
        }
    }

    /// Value used only to pick the opening player.
    ///
    /// 3 is lowest and the order ascends through the ace. The wild 2 and the
    /// clearing 10 never count as a lowest card and return `None`.
    #[must_use]
    pub const fn lowest_deal_value(self) -> Option<u8> {
        match self {
            Self::Two | Self::Ten => None,
            Self::Three => Some(0),
            Self::Four => Some(1),
            Self::Five => Some(2),
            Self::Six => Some(3),
            Self::Seven => Some(4),
            Self::Eight => Some(5),
            Self::Nine => Some(6),
            Self::Jack => Some(7),
            Self::Queen => Some(8),
            Self::King => Some(9),
            Self::Ace => Some(10),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card. Identity is the (rank, suit) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// See [`Rank::play_value`].
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.rank.play_value()
    }

    /// See [`Rank::lowest_deal_value`].
    #[must_use]
    pub const fn lowest_deal_value(&self) -> Option<u8> {
        self.rank.lowest_deal_value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses "10♦", "10-♦" or "10D".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().next_back().ok_or(CardParseError::Empty)?;
        let suit = Suit::from_char(suit_char).ok_or(CardParseError::UnknownSuit)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank_part = rank_part.strip_suffix('-').unwrap_or(rank_part);
        let rank = Rank::from_label(rank_part).ok_or(CardParseError::UnknownRank)?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds an ordered 52-card deck, 13 ranks in each of the four suits.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Returns a uniformly shuffled copy of `deck`, leaving the input untouched.
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut cards = deck.to_vec();
    cards.shuffle(rng);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn deck_has_every_card_once() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, a) in deck.iter().enumerate() {
            assert!(!deck[i + 1..].contains(a), "duplicate {a}");
        }
    }

    #[test]
    fn shuffle_leaves_input_alone() {
        let deck = build_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shuffled = shuffle(&deck, &mut rng);
        assert_eq!(deck, build_deck());
        assert_eq!(shuffled.len(), deck.len());
        assert!(deck.iter().all(|card| shuffled.contains(card)));
    }

    #[test]
    fn two_outranks_ace_and_courts_outrank_numbers() {
        assert!(Rank::Two.play_value() > Rank::Ace.play_value());
        assert!(Rank::Jack.play_value() > Rank::Ten.play_value());
        assert!(Rank::Four.play_value() > Rank::Three.play_value());
    }

    #[test]
    fn lowest_deal_value_skips_two_and_ten() {
        assert_eq!(Rank::Three.lowest_deal_value(), Some(0));
        assert!(Rank::Four.lowest_deal_value() < Rank::Five.lowest_deal_value());
        assert_eq!(Rank::Two.lowest_deal_value(), None);
        assert_eq!(Rank::Ten.lowest_deal_value(), None);
    }

    #[test]
    fn parses_and_displays_ids() {
        let card: Card = "10♦".parse().unwrap();
        assert_eq!(card, Card::new(Suit::Diamonds, Rank::Ten));
        assert_eq!("A-♠".parse::<Card>().unwrap(), Card::new(Suit::Spades, Rank::Ace));
        assert_eq!("qh".parse::<Card>().unwrap(), Card::new(Suit::Hearts, Rank::Queen));
        assert_eq!(alloc::format!("{card}"), "10♦");
        assert_eq!("".parse::<Card>().unwrap_err(), CardParseError::Empty);
        assert_eq!("1♦".parse::<Card>().unwrap_err(), CardParseError::UnknownRank);
        assert_eq!("5X".parse::<Card>().unwrap_err(), CardParseError::UnknownSuit);
    }
}
