//! Card types and deck utilities.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit. Suits have no ordering between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs (`c`).
    Clubs,
    /// Diamonds (`d`).
    Diamonds,
    /// Hearts (`h`).
    Hearts,
    /// Spades (`s`).
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the single-letter code used in card codes.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }

    /// Parses a suit letter. Codes are case-sensitive.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(Self::Clubs),
            'd' => Some(Self::Diamonds),
            'h' => Some(Self::Hearts),
            's' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, ordered from `Two` (lowest) to `Ace` (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10, written `X` in card codes.
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank value, `0` for `Two` through `12` for `Ace`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the single-character code used in card codes.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'X',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Parses a rank character. Codes are case-sensitive.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'X' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Displays and parses as a two-character code: suit letter then rank code,
/// e.g. `hA` for the ace of hearts or `cX` for the ten of clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.code(), self.rank.code())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let (Some(suit), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidLength);
        };

        let suit = Suit::from_code(suit).ok_or(ParseCardError::InvalidSuit(suit))?;
        let rank = Rank::from_code(rank).ok_or(ParseCardError::InvalidRank(rank))?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds the unshuffled 52-card deck: suits in [`Suit::ALL`] order, each
/// running through [`Rank::ALL`].
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_every_card_once() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let count = deck.iter().filter(|&&c| c == Card::new(suit, rank)).count();
                assert_eq!(count, 1, "{suit:?} {rank:?}");
            }
        }
    }

    #[test]
    fn standard_deck_order_is_suit_major() {
        let deck = standard_deck();
        assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Two));
        assert_eq!(deck[12], Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::Two));
        assert_eq!(deck[51], Card::new(Suit::Spades, Rank::Ace));
    }

    #[test]
    fn rank_index_follows_listed_order() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.index() as usize, i);
        }
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Ten > Rank::Nine);
    }

    #[test]
    fn card_codes() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "hA");
        assert_eq!(Card::new(Suit::Clubs, Rank::Ten).to_string(), "cX");
        assert_eq!("s7".parse(), Ok(Card::new(Suit::Spades, Rank::Seven)));

        for card in standard_deck() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn card_code_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::InvalidLength));
        assert_eq!("h".parse::<Card>(), Err(ParseCardError::InvalidLength));
        assert_eq!("h10".parse::<Card>(), Err(ParseCardError::InvalidLength));
        assert_eq!("xA".parse::<Card>(), Err(ParseCardError::InvalidSuit('x')));
        assert_eq!("HA".parse::<Card>(), Err(ParseCardError::InvalidSuit('H')));
        assert_eq!("h1".parse::<Card>(), Err(ParseCardError::InvalidRank('1')));
        assert_eq!("ha".parse::<Card>(), Err(ParseCardError::InvalidRank('a')));
    }
}
