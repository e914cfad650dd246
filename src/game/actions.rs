use tracing::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{DrawOutcome, PlayOutcome, TrickResult};
use crate::rules::{self, PLAYS_PER_TRICK};

use super::{Game, GameState};

impl Game {
    const fn ensure_in_progress(&self) -> Result<(), ActionError> {
        match self.state {
            GameState::InProgress => Ok(()),
            GameState::NotStarted | GameState::Finished => Err(ActionError::InvalidState),
        }
    }

    /// Returns whether `card` may be played into the current trick.
    ///
    /// Any card may start a trick. Otherwise the card must share the suit or
    /// the rank of the first card in the center, which during the opening
    /// trick is the revealed lead card.
    pub fn is_legal_move(&self, card: Card) -> bool {
        rules::is_legal_follow(self.center.first().copied(), card)
    }

    /// Plays `card` from the current player's hand into the center.
    ///
    /// The fourth play of a trick resolves it: the winner scores a point and
    /// leads the next trick. Otherwise the turn passes to the next seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, the card does not
    /// follow the first card's suit or rank, or the current player does not
    /// hold it. Legality is checked first. Nothing changes on error and the
    /// same player keeps the turn.
    pub fn play_card(&mut self, card: Card) -> Result<PlayOutcome, ActionError> {
        self.ensure_in_progress()?;

        if !self.is_legal_move(card) {
            return Err(ActionError::IllegalMove);
        }

        let seat = self.turn.player_index;
        if !self.hands[seat].remove_card(card) {
            return Err(ActionError::CardNotInHand);
        }

        self.center.push(card);
        self.turn.plays += 1;
        debug!(seat, card = %card, trick = self.turn.trick, "card played");

        let trick = if self.turn.plays == PLAYS_PER_TRICK {
            Some(self.resolve_trick())
        } else {
            None
        };

        self.next_player_turn();
        self.check_game_over();

        Ok(PlayOutcome { seat, card, trick })
    }

    /// Draws the front card of the deck into the current player's hand.
    ///
    /// Drawing does not end the turn. When the deck is empty the player
    /// forfeits the turn instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress.
    pub fn draw_card(&mut self) -> Result<DrawOutcome, ActionError> {
        self.ensure_in_progress()?;

        let seat = self.turn.player_index;
        let outcome = if let Some(card) = self.deck.pop_front() {
            self.hands[seat].add_card(card);
            debug!(seat, card = %card, remaining = self.deck.len(), "card drawn");
            DrawOutcome::Drew(card)
        } else {
            debug!(seat, "deck empty, turn skipped");
            self.next_player_turn();
            DrawOutcome::DeckEmptyTurnSkipped
        };

        self.check_game_over();
        Ok(outcome)
    }

    /// Scores the completed trick and clears the center.
    ///
    /// Leaves the turn on the seat before the winner, so the advance that
    /// follows every play hands the lead to the winner.
    fn resolve_trick(&mut self) -> TrickResult {
        let position = rules::winning_position(&self.center)
            .expect("a completed trick always has cards in the center");
        let winning_card = self.center[position];
        let winner = rules::winning_seat(self.turn.player_index, position, self.center.len());

        self.scores[winner] += 1;
        info!(
            trick = self.turn.trick,
            winner,
            card = %winning_card,
            "trick won"
        );

        let result = TrickResult {
            number: self.turn.trick,
            winner,
            winning_card,
            cards: core::mem::take(&mut self.center),
        };
        self.tricks.push(result.clone());

        self.turn.trick += 1;
        self.turn.plays = 0;
        self.turn.player_index = rules::previous_seat(winner);

        result
    }

    const fn next_player_turn(&mut self) {
        self.turn.player_index = rules::next_seat(self.turn.player_index);
    }

    /// Ends the game once any hand is empty. Lower seats are checked first.
    fn check_game_over(&mut self) {
        if let Some(seat) = self.hands.iter().position(Hand::is_empty) {
            self.state = GameState::Finished;
            self.winner = Some(seat);
            info!(winner = seat, "game over");
        }
    }
}
