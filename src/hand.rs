//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A player's hand.
///
/// Cards stay in the order they were received; playing a card removes it
/// without reordering the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from the hand.
    ///
    /// Returns `false` if the hand does not hold it.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn remove_keeps_insertion_order() {
        let a = Card::new(Suit::Spades, Rank::Four);
        let b = Card::new(Suit::Clubs, Rank::Ace);
        let c = Card::new(Suit::Hearts, Rank::Ten);

        let mut hand = Hand::new();
        hand.add_card(a);
        hand.add_card(b);
        hand.add_card(c);

        assert!(hand.remove_card(b));
        assert_eq!(hand.cards(), &[a, c]);
        assert!(!hand.remove_card(b));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn empty_hand() {
        let mut hand: Hand = [Card::new(Suit::Diamonds, Rank::Two)].into_iter().collect();
        assert!(!hand.is_empty());
        assert!(hand.contains(Card::new(Suit::Diamonds, Rank::Two)));

        hand.clear();
        assert!(hand.is_empty());
        assert!(!hand.contains(Card::new(Suit::Diamonds, Rank::Two)));
    }
}
