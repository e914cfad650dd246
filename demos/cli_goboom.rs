//! CLI Go Boom example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use goboom::{
    Card, Command, CommandOutcome, DrawOutcome, Game, GameOptions, GameSnapshot, PLAYER_COUNT,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cli_goboom")]
#[command(about = "Play Go Boom for four seats at one console")]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Deal from the unshuffled deck
    #[arg(long)]
    no_shuffle: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default().with_shuffle(!args.no_shuffle);
    let mut game = Game::new(options, seed);

    if let Err(err) = game.start_new_game() {
        println!("Setup error: {err}");
        return;
    }

    if let Some(lead) = game.lead_card() {
        println!("Lead card {lead}");
        println!(
            "Player{} is the first player because of {lead}.",
            game.current_player() + 1
        );
        println!();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_game_over() {
        print_table(&game.snapshot());

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(_) => {
                println!("Invalid command. Please try again.");
                continue;
            }
        };

        match game.apply_command(command) {
            Ok(CommandOutcome::Quit) => {
                println!("Game ended by the player.");
                return;
            }
            Ok(CommandOutcome::Drew(DrawOutcome::Drew(card))) => {
                println!("Player{} drew a card: {card}", game.current_player() + 1);
            }
            Ok(CommandOutcome::Drew(DrawOutcome::DeckEmptyTurnSkipped)) => {
                println!("The deck is empty. Skipping to the next player.");
            }
            Ok(CommandOutcome::Played(outcome)) => {
                println!("Player{} plays {}", outcome.seat + 1, outcome.card);
                if let Some(trick) = outcome.trick {
                    println!(
                        "*** Player{} wins Trick #{} ***",
                        trick.winner + 1,
                        trick.number
                    );
                    println!();
                }
            }
            Err(err) => println!("Invalid move: {err}"),
        }
    }

    if let Some(winner) = game.winner() {
        println!("*** Player{} is the Winner!!! ***", winner + 1);
    }
}

fn print_table(snapshot: &GameSnapshot) {
    println!("Trick #{}", snapshot.current_trick);
    for (seat, hand) in snapshot.hands.iter().enumerate() {
        println!("Player{}: {}", seat + 1, format_cards(hand));
    }
    println!("Deck: {}", format_cards(&snapshot.deck));
    println!("Center: {}", format_cards(&snapshot.center));

    let scores = (0..PLAYER_COUNT)
        .map(|seat| format!("Player{} = {}", seat + 1, snapshot.scores[seat]))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("Score: {scores}");
    println!("Turn: Player{}", snapshot.current_player + 1);
    print!("> ");
    let _ = io::stdout().flush();
}

fn format_cards(cards: &[Card]) -> String {
    let codes = cards.iter().map(Card::to_string).collect::<Vec<_>>();
    format!("[{}]", codes.join(", "))
}
