//! A four-player Go Boom trick-taking card engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that owns the deck, the four hands, the
//! center pile and the scores, and advances the game one play or draw at a
//! time. It performs no I/O: a presentation layer reads commands, feeds them
//! to [`Game::apply_command`] and renders [`Game::snapshot`].
//!
//! # Example
//!
//! ```
//! use goboom::{Command, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_new_game().unwrap();
//! assert_eq!(game.state(), GameState::InProgress);
//!
//! let seat = game.current_player();
//! game.apply_command(Command::Draw).unwrap();
//! assert_eq!(game.hand(seat).unwrap().len(), 8);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use error::{ActionError, ParseCardError, ParseCommandError, SetupError};
pub use game::{Command, Game, GameSnapshot, GameState, TurnPosition};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{CommandOutcome, DrawOutcome, PlayOutcome, TrickResult};
pub use rules::{HAND_SIZE, PLAYER_COUNT};
