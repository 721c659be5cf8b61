//! Hot-seat CLI for Threes.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use threes::{Card, ExchangeStatus, Game, GameOptions, Phase, Player, Snapshot, Suit, Zone};

fn main() {
    println!("Threes CLI example (type 'q' to quit)");

    let names = prompt_names();
    if names.len() < 2 {
        println!("Need at least two players.");
        return;
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    if let Err(err) = game.initialize(names) {
        println!("Setup error: {err}");
        return;
    }
    match game.setup() {
        Ok(opening) => {
            let name = game.player(opening).map(|p| p.name().to_string());
            println!("{} shows the lowest card and will lead.", name.unwrap_or_default());
        }
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    }

    while game.phase() == Phase::Exchange {
        if !run_exchange_turn(&game) {
            return;
        }
    }

    while game.phase() == Phase::Playing {
        if !run_play_turn(&game) {
            return;
        }
    }

    print_standings(&game);
}

fn run_exchange_turn(game: &Game) -> bool {
    let Some(index) = game.current_player() else {
        return false;
    };
    let Some(player) = game.player(index) else {
        return false;
    };

    println!("\n{} exchanging", player.name());
    println!("  Hand:    {}", format_cards(player.hand()));
    println!("  Face-up: {}", format_cards(player.face_up()));
    println!("Actions: <hand card> <face-up card> to swap, [r]eset, [c]onfirm");

    let input = prompt_line("Exchange: ");
    match input.as_str() {
        "q" | "quit" => return false,
        "r" | "reset" => {
            if let Err(err) = game.reset_exchange() {
                println!("Exchange error: {err}");
            }
        }
        "c" | "confirm" => match game.confirm_exchange() {
            Ok(ExchangeStatus::Next(next)) => println!("Next up: seat {next}"),
            Ok(ExchangeStatus::Complete { first_player }) => {
                println!("Exchange complete, seat {first_player} leads.");
            }
            Err(err) => println!("Exchange error: {err}"),
        },
        _ => {
            let mut parts = input.split_whitespace().map(str::parse::<Card>);
            match (parts.next(), parts.next()) {
                (Some(Ok(a)), Some(Ok(b))) => {
                    if let Err(err) = game.swap(a, Zone::Hand, b, Zone::FaceUp) {
                        println!("Exchange error: {err}");
                    }
                }
                _ => println!("Enter two cards, e.g. '5h kd'."),
            }
        }
    }
    true
}

fn run_play_turn(game: &Game) -> bool {
    let snapshot = game.snapshot();
    let Some(index) = snapshot.current_player else {
        return false;
    };
    let Some(player) = game.player(index) else {
        return false;
    };

    print_table(&snapshot, &player);

    let plays = game.legal_plays();
    let Some(zone) = player.required_zone() else {
        return false;
    };

    if zone == Zone::FaceDown {
        println!("Blind play: choose 1-{}, or [p]ick up", player.face_down().len());
    } else {
        let hints: Vec<String> = plays
            .iter()
            .map(|(_, cards)| format_cards(cards))
            .collect();
        let hints = if hints.is_empty() {
            "(none)".to_string()
        } else {
            hints.join(" | ")
        };
        println!("Playable: {hints}");
        println!("Enter cards to play (e.g. '8h 8c'), or [p]ick up");
    }

    let input = prompt_line("Play: ");
    match input.as_str() {
        "q" | "quit" => return false,
        "p" | "pick" => match game.pick_up_pile() {
            Ok(count) => println!("Picked up {count} card(s)."),
            Err(err) => println!("Play error: {err}"),
        },
        _ => {
            let selection = if zone == Zone::FaceDown {
                input
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| player.face_down().get(i).copied())
                    .map(|card| vec![card])
            } else {
                input
                    .split_whitespace()
                    .map(str::parse::<Card>)
                    .collect::<Result<Vec<_>, _>>()
                    .ok()
            };

            let Some(cards) = selection else {
                println!("Could not read that selection.");
                return true;
            };

            match game.execute_play(zone, &cards) {
                Ok(outcome) => {
                    if let Some(count) = outcome.penalty {
                        println!(
                            "Turned over {} - it does not fit. Picked up {count} card(s).",
                            format_cards(&outcome.cards)
                        );
                    } else if let Some(effect) = outcome.effect {
                        println!("{effect:?}!");
                    }
                    if outcome.finished {
                        println!("{} is out!", player.name());
                    }
                }
                Err(err) => println!("Play error: {err}"),
            }
        }
    }
    true
}

fn print_table(snapshot: &Snapshot, player: &Player) {
    let top = snapshot
        .discard_top
        .as_ref()
        .map_or_else(|| "(empty)".to_string(), format_card);
    println!(
        "\nDraw: {} | Discard: {} (top {}) | Removed: {}",
        snapshot.draw_pile, snapshot.discard_pile, top, snapshot.removed
    );
    for (index, seat) in snapshot.players.iter().enumerate() {
        let marker = if Some(index) == snapshot.current_player { "*" } else { " " };
        let status = if seat.has_finished { " (out)" } else { "" };
        println!(
            "{marker} {}{status}: hand {} | up {} | down {}",
            seat.name,
            seat.hand,
            format_cards(&seat.face_up),
            seat.face_down
        );
    }
    println!("\n{} to play", player.name());
    println!("  Hand: {}", format_cards(player.hand()));
}

fn print_standings(game: &Game) {
    let Some(standings) = game.standings() else {
        return;
    };
    println!("\nGame over.");
    for (place, index) in standings.finish_order.iter().enumerate() {
        if let Some(player) = game.player(*index) {
            println!("{}. {}", place + 1, player.name());
        }
    }
    if let Some(player) = standings.loser.and_then(|index| game.player(index)) {
        println!("{} is left holding cards.", player.name());
    }
}

fn prompt_names() -> Vec<String> {
    let input = prompt_line("Player names (2-4, separated by spaces): ");
    let mut names: Vec<String> = Vec::new();
    for name in input.split_whitespace().take(4) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
