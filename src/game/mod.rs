//! Game engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::TrickResult;
use crate::rules::PLAYER_COUNT;

mod actions;
mod command;
mod setup;
pub mod state;

pub use command::Command;
pub use state::{GameSnapshot, GameState, TurnPosition};

/// A four-seat trick-taking game engine.
///
/// The game owns the deck, the hands, the center pile and the scores. It is
/// driven one action at a time by [`play_card`](Self::play_card),
/// [`draw_card`](Self::draw_card) or [`apply_command`](Self::apply_command),
/// always on behalf of the seat whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards left to draw, front first.
    deck: VecDeque<Card>,
    /// Cards in the trick being played.
    center: Vec<Card>,
    /// One hand per seat.
    hands: [Hand; PLAYER_COUNT],
    /// Tricks won per seat.
    scores: [u32; PLAYER_COUNT],
    /// Current game state.
    state: GameState,
    /// Current turn position.
    turn: TurnPosition,
    /// Card revealed to pick the first player.
    lead_card: Option<Card>,
    /// Resolved tricks, oldest first.
    tricks: Vec<TrickResult>,
    /// Seat that emptied its hand.
    winner: Option<usize>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The table is empty until [`start_new_game`](Self::start_new_game) or
    /// [`start_with_deck`](Self::start_with_deck) is called.
    ///
    /// # Example
    ///
    /// ```
    /// use goboom::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            deck: VecDeque::new(),
            center: Vec::new(),
            hands: Default::default(),
            scores: [0; PLAYER_COUNT],
            state: GameState::NotStarted,
            turn: TurnPosition::new(),
            lead_card: None,
            tricks: Vec::new(),
            winner: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether a hand has run out of cards.
    pub const fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Finished)
    }

    /// Returns the seat that emptied its hand first, once the game is over.
    ///
    /// When several hands are empty at the same check, the lowest seat wins.
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns the current turn position.
    pub const fn current_turn(&self) -> TurnPosition {
        self.turn
    }

    /// Returns the seat whose turn it is.
    pub const fn current_player(&self) -> usize {
        self.turn.player_index
    }

    /// Returns the current trick number, starting at 1.
    pub const fn current_trick(&self) -> u32 {
        self.turn.trick
    }

    /// Returns the hand for `seat`, or `None` for an invalid seat.
    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    /// Returns every seat's hand.
    pub const fn hands(&self) -> &[Hand; PLAYER_COUNT] {
        &self.hands
    }

    /// Returns the remaining deck, next card to be drawn first.
    pub fn deck(&self) -> impl ExactSizeIterator<Item = Card> + '_ {
        self.deck.iter().copied()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the cards in the current trick, in play order.
    pub fn center(&self) -> &[Card] {
        &self.center
    }

    /// Returns tricks won per seat.
    pub const fn scores(&self) -> [u32; PLAYER_COUNT] {
        self.scores
    }

    /// Returns the card revealed to pick the first player.
    pub const fn lead_card(&self) -> Option<Card> {
        self.lead_card
    }

    /// Returns every resolved trick, oldest first.
    pub fn tricks(&self) -> &[TrickResult] {
        &self.tricks
    }

    /// Returns an owned copy of the table for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            hands: core::array::from_fn(|seat| self.hands[seat].cards().to_vec()),
            deck: self.deck().collect(),
            center: self.center.clone(),
            scores: self.scores,
            current_player: self.turn.player_index,
            current_trick: self.turn.trick,
            winner: self.winner,
        }
    }
}
