//! Pile compatibility and special effects.

use crate::card::{Card, Rank};
use crate::error::IllegalPlay;
use crate::result::SpecialEffect;

/// Checks whether `rank` may be played onto a pile whose top card is `top`.
///
/// # Errors
///
/// Returns the reason the rank is rejected.
pub const fn check_against_pile(rank: Rank, top: Option<Rank>) -> Result<(), IllegalPlay> {
    let Some(top) = top else {
        return Ok(());
    };
    match rank {
        Rank::Two | Rank::Ten => Ok(()),
        Rank::Three => match top {
            Rank::Two | Rank::Three => Ok(()),
            _ => Err(IllegalPlay::ThreeNeedsLowTop),
        },
        _ if rank.play_value() >= top.play_value() => Ok(()),
        _ => Err(IllegalPlay::TooLow { played: rank, top }),
    }
}

/// Effect of playing `rank`, evaluated on the discard pile after the played
/// cards were added. First match wins: 10, then four of a kind, then 2.
#[must_use]
pub fn effect_of(rank: Rank, discard: &[Card]) -> Option<SpecialEffect> {
    if rank == Rank::Ten {
        Some(SpecialEffect::Clear)
    } else if top_four_match(discard) {
        Some(SpecialEffect::FourOfAKind)
    } else if rank == Rank::Two {
        Some(SpecialEffect::Wild)
    } else {
        None
    }
}

fn top_four_match(discard: &[Card]) -> bool {
    let Some(start) = discard.len().checked_sub(4) else {
        return false;
    };
    let top = &discard[start..];
    top.iter().all(|card| card.rank == top[0].rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn pile(ranks: &[Rank]) -> alloc::vec::Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect()
    }

    #[test]
    fn anything_goes_on_an_empty_pile() {
        for rank in Rank::ALL {
            assert_eq!(check_against_pile(rank, None), Ok(()));
        }
    }

    #[test]
    fn two_and_ten_always_play() {
        assert_eq!(check_against_pile(Rank::Two, Some(Rank::Ace)), Ok(()));
        assert_eq!(check_against_pile(Rank::Ten, Some(Rank::Two)), Ok(()));
    }

    #[test]
    fn three_only_on_two_or_three() {
        assert_eq!(check_against_pile(Rank::Three, Some(Rank::Two)), Ok(()));
        assert_eq!(check_against_pile(Rank::Three, Some(Rank::Three)), Ok(()));
        assert_eq!(
            check_against_pile(Rank::Three, Some(Rank::Nine)),
            Err(IllegalPlay::ThreeNeedsLowTop)
        );
    }

    #[test]
    fn ordinary_ranks_must_match_or_beat_the_top() {
        assert_eq!(check_against_pile(Rank::Nine, Some(Rank::Nine)), Ok(()));
        assert_eq!(check_against_pile(Rank::King, Some(Rank::Jack)), Ok(()));
        assert_eq!(
            check_against_pile(Rank::Five, Some(Rank::Eight)),
            Err(IllegalPlay::TooLow {
                played: Rank::Five,
                top: Rank::Eight
            })
        );
        assert!(check_against_pile(Rank::Ace, Some(Rank::Two)).is_err());
    }

    #[test]
    fn ten_beats_four_of_a_kind() {
        let discard = pile(&[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Ten]);
        assert_eq!(effect_of(Rank::Ten, &discard), Some(SpecialEffect::Clear));
    }

    #[test]
    fn four_twos_are_four_of_a_kind() {
        let discard = pile(&[Rank::Two, Rank::Two, Rank::Two, Rank::Two]);
        assert_eq!(
            effect_of(Rank::Two, &discard),
            Some(SpecialEffect::FourOfAKind)
        );
        assert_eq!(
            effect_of(Rank::Two, &discard[1..]),
            Some(SpecialEffect::Wild)
        );
    }

    #[test]
    fn four_of_a_kind_needs_the_exact_top_four() {
        let discard = pile(&[Rank::Queen, Rank::Queen, Rank::King, Rank::Queen, Rank::Queen]);
        assert_eq!(effect_of(Rank::Queen, &discard), None);
        assert_eq!(effect_of(Rank::Queen, &discard[..3]), None);
    }
}
