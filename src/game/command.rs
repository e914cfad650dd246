use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionError, ParseCommandError};
use crate::result::CommandOutcome;

use super::Game;

/// A single player input.
///
/// Parses from a line of text: `x` quits, `d` draws (both
/// case-insensitive) and a two-character card code such as `hA` plays that
/// card. Surrounding whitespace is ignored.
///
/// ```
/// use goboom::{Card, Command, Rank, Suit};
///
/// assert_eq!("d".parse(), Ok(Command::Draw));
/// assert_eq!(
///     "hA".parse(),
///     Ok(Command::Play(Card::new(Suit::Hearts, Rank::Ace)))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop playing.
    Quit,
    /// Draw a card from the deck.
    Draw,
    /// Play a card from the current player's hand.
    Play(Card),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("x") {
            return Ok(Self::Quit);
        }
        if input.eq_ignore_ascii_case("d") {
            return Ok(Self::Draw);
        }
        input
            .parse()
            .map(Self::Play)
            .map_err(|_| ParseCommandError::Unknown)
    }
}

impl Game {
    /// Applies `command` for the current player.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Game::play_card`] or [`Game::draw_card`].
    /// [`Command::Quit`] never fails and leaves the game untouched.
    pub fn apply_command(&mut self, command: Command) -> Result<CommandOutcome, ActionError> {
        match command {
            Command::Quit => Ok(CommandOutcome::Quit),
            Command::Draw => self.draw_card().map(CommandOutcome::Drew),
            Command::Play(card) => self.play_card(card).map(CommandOutcome::Played),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn parses_commands() {
        assert_eq!("x".parse(), Ok(Command::Quit));
        assert_eq!("X".parse(), Ok(Command::Quit));
        assert_eq!(" D\n".parse(), Ok(Command::Draw));
        assert_eq!(
            "sX".parse(),
            Ok(Command::Play(Card::new(Suit::Spades, Rank::Ten)))
        );
    }

    #[test]
    fn rejects_unknown_input() {
        for input in ["", "draw", "h10", "HA", "q", "dd"] {
            assert_eq!(
                input.parse::<Command>(),
                Err(ParseCommandError::Unknown),
                "{input:?}"
            );
        }
    }
}
