//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while setting up a game.
///
/// These signal a deck that cannot support a game at all, which only happens
/// with a hand-stacked deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Not enough cards in the deck to deal the hands and reveal a lead card.
    #[error("not enough cards in the deck: need {required}, have {available}")]
    NotEnoughCards {
        /// Cards needed to finish setup.
        required: usize,
        /// Cards left in the deck.
        available: usize,
    },
    /// The same card appears twice in the deck.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when the current player acts.
///
/// All of these leave the game untouched; the same player keeps the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game has not started or is already over.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The card matches neither the suit nor the rank of the trick's first card.
    #[error("illegal move: card must follow the suit or rank of the first card")]
    IllegalMove,
    /// The current player does not hold the card.
    #[error("card not in hand")]
    CardNotInHand,
}

/// Errors that can occur when parsing a two-character card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The code is not exactly two characters.
    #[error("card code must be exactly two characters")]
    InvalidLength,
    /// Unknown suit letter.
    #[error("invalid suit `{0}`")]
    InvalidSuit(char),
    /// Unknown rank code.
    #[error("invalid rank `{0}`")]
    InvalidRank(char),
}

/// Errors that can occur when parsing a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// Input is neither a known command nor a card code.
    #[error("unknown command")]
    Unknown,
}
