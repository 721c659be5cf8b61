//! Shared helpers for integration tests.

use std::sync::Once;

use threes::{Card, ExchangeStatus, Game, GameOptions, Player, Rank, Suit, TableState};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Installs a test-friendly subscriber, filtered by `TEST_LOG`, then
/// `RUST_LOG`, then "warn".
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A table that has been dealt and has finished exchanging.
pub fn playing_game(options: GameOptions, names: &[&str], seed: u64) -> Game {
    init_logging();
    let game = Game::new(options, seed);
    game.initialize(names.iter().copied()).unwrap();
    game.setup().unwrap();
    while let ExchangeStatus::Next(_) = game.confirm_exchange().unwrap() {}
    game
}

/// Replaces a player's zones with the given cards, keeping their name.
pub fn seat(
    table: &mut TableState,
    index: usize,
    hand: &[Card],
    face_up: &[Card],
    face_down: &[Card],
) {
    let mut player = Player::new(table.players[index].name());
    for &c in hand {
        player.add_card(c, threes::Zone::Hand);
    }
    for &c in face_up {
        player.add_card(c, threes::Zone::FaceUp);
    }
    for &c in face_down {
        player.add_card(c, threes::Zone::FaceDown);
    }
    table.players[index] = player;
}
