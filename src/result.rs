//! Outcome types returned by game actions.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A resolved trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    /// The trick number, starting at 1.
    pub number: u32,
    /// Seat that won the trick and leads the next one.
    pub winner: usize,
    /// The highest card in the lead suit.
    pub winning_card: Card,
    /// Every card in the center when the trick resolved, in play order.
    ///
    /// The opening trick also holds the revealed lead card at index 0.
    pub cards: Vec<Card>,
}

/// Result of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Seat that played.
    pub seat: usize,
    /// The card played.
    pub card: Card,
    /// The trick this play completed, if any.
    pub trick: Option<TrickResult>,
}

/// Result of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The current player drew this card and keeps the turn.
    Drew(Card),
    /// The deck was empty; the turn passed to the next seat.
    DeckEmptyTurnSkipped,
}

/// Result of applying a [`Command`](crate::game::Command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A card was played.
    Played(PlayOutcome),
    /// A draw was attempted.
    Drew(DrawOutcome),
    /// The controller asked to stop. The game is left untouched.
    Quit,
}
