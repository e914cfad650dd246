use alloc::vec::Vec;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::card::{Card, Rank, standard_deck};
use crate::error::SetupError;
use crate::hand::Hand;
use crate::rules::{self, HAND_SIZE, SETUP_CARDS};

use super::{Game, GameState, TurnPosition};

/// Bit for `card` in a 52-bit set.
const fn card_bit(card: Card) -> u64 {
    1 << (card.suit as u32 * Rank::ALL.len() as u32 + card.rank.index() as u32)
}

fn find_duplicate(deck: &[Card]) -> Option<Card> {
    let mut seen: u64 = 0;
    for &card in deck {
        let bit = card_bit(card);
        if seen & bit != 0 {
            return Some(card);
        }
        seen |= bit;
    }
    None
}

impl Game {
    /// Starts a new game: builds the deck, shuffles it (unless
    /// [`GameOptions::shuffle`](crate::GameOptions::shuffle) is off), deals
    /// seven cards to each seat and reveals the lead card that picks the first
    /// player.
    ///
    /// Any previous game is discarded, including scores.
    ///
    /// # Errors
    ///
    /// The standard deck always holds enough cards, so this only fails if the
    /// setup invariants themselves are broken.
    pub fn start_new_game(&mut self) -> Result<(), SetupError> {
        self.reset();
        self.deck = standard_deck().into();
        debug!(cards = self.deck.len(), "deck created");

        if self.options.shuffle {
            self.shuffle_deck();
        }

        self.set_up_table()
    }

    /// Starts a new game dealt from `deck` exactly as given, front first.
    ///
    /// The deck does not need to be complete, which keeps tests short. It is
    /// never shuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than 29 cards or repeats a
    /// card. The current game is left untouched in that case.
    pub fn start_with_deck(&mut self, deck: Vec<Card>) -> Result<(), SetupError> {
        if deck.len() < SETUP_CARDS {
            return Err(SetupError::NotEnoughCards {
                required: SETUP_CARDS,
                available: deck.len(),
            });
        }
        if let Some(card) = find_duplicate(&deck) {
            return Err(SetupError::DuplicateCard(card));
        }

        self.reset();
        self.deck = deck.into();
        self.set_up_table()
    }

    fn reset(&mut self) {
        self.deck.clear();
        self.center.clear();
        self.hands.iter_mut().for_each(Hand::clear);
        self.scores = [0; rules::PLAYER_COUNT];
        self.state = GameState::NotStarted;
        self.turn = TurnPosition::new();
        self.lead_card = None;
        self.tricks.clear();
        self.winner = None;
    }

    fn set_up_table(&mut self) -> Result<(), SetupError> {
        self.deal_cards()?;
        self.determine_first_player()?;
        self.state = GameState::InProgress;
        Ok(())
    }

    /// Shuffles the deck in place.
    fn shuffle_deck(&mut self) {
        self.deck.make_contiguous().shuffle(&mut self.rng);
        debug!("deck shuffled");
    }

    /// Deals a block of seven cards from the front of the deck to each seat
    /// in turn: seat 0 gets the first seven, seat 1 the next seven, and so on.
    fn deal_cards(&mut self) -> Result<(), SetupError> {
        let required = rules::PLAYER_COUNT * HAND_SIZE;
        if self.deck.len() < required {
            return Err(SetupError::NotEnoughCards {
                required,
                available: self.deck.len(),
            });
        }

        for hand in &mut self.hands {
            *hand = self.deck.drain(..HAND_SIZE).collect();
        }

        debug!(remaining = self.deck.len(), "hands dealt");
        Ok(())
    }

    /// Moves the next deck card into the center as the lead card and gives
    /// the first turn to the seat its rank maps to.
    fn determine_first_player(&mut self) -> Result<Card, SetupError> {
        let lead = self.deck.pop_front().ok_or(SetupError::NotEnoughCards {
            required: 1,
            available: 0,
        })?;

        self.center.push(lead);
        self.lead_card = Some(lead);
        self.turn.player_index = rules::first_player_for(lead.rank);

        info!(
            lead = %lead,
            first_player = self.turn.player_index,
            "first player chosen"
        );
        Ok(lead)
    }
}
