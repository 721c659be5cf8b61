//! Property tests for deck construction and dealing.

mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use threes::{Card, DECK_SIZE, Game, GameOptions, SetupError, Zone, build_deck, shuffle};

const NAMES: [&str; 4] = ["Alice", "Bob", "Cara", "Dan"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A shuffled deck is still every card exactly once.
    #[test]
    fn prop_shuffled_deck_is_complete(seed in any::<u64>()) {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let shuffled = shuffle(&build_deck(), &mut rng);

        let unique: HashSet<Card> = shuffled.iter().copied().collect();
        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }

    /// Every player gets three cards per zone and the rest stay in the draw pile.
    #[test]
    fn prop_deal_fills_every_zone(players in 2usize..=4, seed in any::<u64>()) {
        common::init_logging();
        let game = Game::new(GameOptions::default(), seed);
        game.initialize(NAMES[..players].iter().copied()).unwrap();
        game.deal().unwrap();

        let table = game.table.lock();
        prop_assert_eq!(table.draw_pile.len(), DECK_SIZE - 9 * players);

        let mut seen: HashSet<Card> = table.draw_pile.iter().copied().collect();
        for player in &table.players {
            for zone in [Zone::Hand, Zone::FaceUp, Zone::FaceDown] {
                prop_assert_eq!(player.cards(zone).len(), 3);
                for card in player.cards(zone) {
                    prop_assert!(seen.insert(*card), "{} dealt twice", card);
                }
            }
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    /// Dealing succeeds exactly when the draw pile covers nine cards a player.
    #[test]
    fn prop_deal_needs_nine_per_player(
        players in 2usize..=4,
        available in 0usize..=DECK_SIZE,
        seed in any::<u64>(),
    ) {
        let game = Game::new(GameOptions::default(), seed);
        game.initialize(NAMES[..players].iter().copied()).unwrap();
        game.table.lock().draw_pile.truncate(available);

        let result = game.deal();
        if available >= 9 * players {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(game.cards_remaining(), available - 9 * players);
        } else {
            prop_assert_eq!(result, Err(SetupError::InsufficientCards));
            prop_assert_eq!(game.cards_remaining(), available);
        }
    }
}
