//! Fixed rules of the game: seat count, hand size, the lead-card table and
//! the trick arithmetic.
//!
//! None of these are configurable.

use crate::card::{Card, Rank};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 7;

/// Plays that complete a trick.
pub const PLAYS_PER_TRICK: usize = PLAYER_COUNT;

/// Cards needed from the deck to deal every hand and reveal the lead card.
pub const SETUP_CARDS: usize = PLAYER_COUNT * HAND_SIZE + 1;

/// Center pile size when the opening trick resolves.
///
/// The opening trick starts with the revealed lead card already in the
/// center, so it holds one more card than the seats that played into it.
pub const OPENING_TRICK_LEN: usize = PLAYS_PER_TRICK + 1;

/// Seat offset added to the winning position when resolving the opening trick.
pub const OPENING_TRICK_SEAT_OFFSET: usize = 0;

/// Seat offset added to the winning position when resolving any later trick.
pub const TRICK_SEAT_OFFSET: usize = 1;

/// Returns the seat that leads the game, given the revealed lead card's rank.
///
/// | seat | ranks |
/// |---|---|
/// | 0 | A, 5, 9, K |
/// | 1 | 2, 6, 10 |
/// | 2 | 3, 7, J |
/// | 3 | 4, 8, Q |
#[must_use]
pub const fn first_player_for(rank: Rank) -> usize {
    match rank {
        Rank::Ace | Rank::Five | Rank::Nine | Rank::King => 0,
        Rank::Two | Rank::Six | Rank::Ten => 1,
        Rank::Three | Rank::Seven | Rank::Jack => 2,
        Rank::Four | Rank::Eight | Rank::Queen => 3,
    }
}

/// Returns whether `card` may follow a trick whose first card is `first`.
///
/// Any card may start a trick. Afterwards a card must share the suit or the
/// rank of the first card.
#[must_use]
pub fn is_legal_follow(first: Option<Card>, card: Card) -> bool {
    first.is_none_or(|first| card.suit == first.suit || card.rank == first.rank)
}

/// Returns the position in `center` of the highest card in the suit of
/// `center[0]`, or `None` for an empty center.
#[must_use]
pub fn winning_position(center: &[Card]) -> Option<usize> {
    let lead_suit = center.first()?.suit;

    center
        .iter()
        .enumerate()
        .filter(|(_, card)| card.suit == lead_suit)
        .max_by_key(|(_, card)| card.rank)
        .map(|(position, _)| position)
}

/// Maps a winning position in the center to the seat that wins the trick.
///
/// `last_seat` is the seat that made the completing play and `center_len`
/// the number of cards in the center at that moment.
#[must_use]
pub const fn winning_seat(last_seat: usize, position: usize, center_len: usize) -> usize {
    let offset = if center_len == OPENING_TRICK_LEN {
        OPENING_TRICK_SEAT_OFFSET
    } else {
        TRICK_SEAT_OFFSET
    };
    (last_seat + position + offset) % PLAYER_COUNT
}

/// Returns the seat after `seat`.
#[must_use]
pub const fn next_seat(seat: usize) -> usize {
    (seat + 1) % PLAYER_COUNT
}

/// Returns the seat before `seat`.
///
/// Trick resolution parks the turn here so that the regular advance after
/// every play lands on the winner.
#[must_use]
pub const fn previous_seat(seat: usize) -> usize {
    (seat + PLAYER_COUNT - 1) % PLAYER_COUNT
}
