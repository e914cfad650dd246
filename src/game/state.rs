//! Game state types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::rules::PLAYER_COUNT;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game has been set up yet.
    NotStarted,
    /// Waiting for the current player to play or draw.
    InProgress,
    /// A hand ran out of cards; see [`Game::winner`](super::Game::winner).
    Finished,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Seat whose turn it is.
    pub player_index: usize,
    /// Current trick number, starting at 1.
    pub trick: u32,
    /// Cards played into the current trick by seats.
    pub plays: usize,
}

impl TurnPosition {
    pub(super) const fn new() -> Self {
        Self {
            player_index: 0,
            trick: 1,
            plays: 0,
        }
    }
}

/// An owned copy of everything a presentation layer needs to render the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Current game state.
    pub state: GameState,
    /// Each seat's hand, in the order the cards were received.
    pub hands: [Vec<Card>; PLAYER_COUNT],
    /// Remaining deck, next card to be drawn first.
    pub deck: Vec<Card>,
    /// Cards in the current trick, in play order.
    pub center: Vec<Card>,
    /// Tricks won per seat.
    pub scores: [u32; PLAYER_COUNT],
    /// Seat whose turn it is.
    pub current_player: usize,
    /// Current trick number.
    pub current_trick: u32,
    /// Seat that emptied its hand, once the game is over.
    pub winner: Option<usize>,
}

impl GameSnapshot {
    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Finished)
    }
}
