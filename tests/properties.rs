//! Property tests over random seeds and random action sequences.

use std::collections::HashSet;

use goboom::{
    ActionError, Card, DECK_SIZE, DrawOutcome, Game, GameOptions, GameSnapshot, GameState,
    PLAYER_COUNT, rules, standard_deck,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Draw,
    /// Play the card at this index of the current hand (wrapping).
    PlayHeld(usize),
    /// Play this card of the standard deck, held or not.
    PlayAny(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::Draw),
        4 => (0..16usize).prop_map(Action::PlayHeld),
        1 => (0..DECK_SIZE).prop_map(Action::PlayAny),
    ]
}

fn all_cards(game: &Game) -> Vec<Card> {
    let mut cards: Vec<Card> = game.deck().collect();
    for hand in game.hands() {
        cards.extend_from_slice(hand.cards());
    }
    cards.extend_from_slice(game.center());
    for trick in game.tricks() {
        cards.extend_from_slice(&trick.cards);
    }
    cards
}

fn assert_conserved(game: &Game) {
    let cards = all_cards(game);
    assert_eq!(cards.len(), DECK_SIZE);

    let unique: HashSet<Card> = cards.into_iter().collect();
    let expected: HashSet<Card> = standard_deck().into_iter().collect();
    assert_eq!(unique, expected);
}

fn chosen_card(game: &Game, action: Action) -> Option<Card> {
    match action {
        Action::Draw => None,
        Action::PlayHeld(index) => {
            let cards = game.hand(game.current_player())?.cards();
            (!cards.is_empty()).then(|| cards[index % cards.len()])
        }
        Action::PlayAny(index) => Some(standard_deck()[index]),
    }
}

fn check_play(before: &GameSnapshot, game: &Game, card: Card, result: Result<bool, ActionError>) {
    let seat = before.current_player;
    let legal = rules::is_legal_follow(before.center.first().copied(), card);

    match result {
        Err(ActionError::IllegalMove) => {
            assert!(!legal);
            assert_eq!(&game.snapshot(), before);
        }
        Err(ActionError::CardNotInHand) => {
            assert!(legal);
            assert!(!before.hands[seat].contains(&card));
            assert_eq!(&game.snapshot(), before);
        }
        Err(ActionError::InvalidState) => panic!("game was in progress"),
        Ok(resolved) => {
            assert!(legal);
            assert_eq!(game.hand(seat).unwrap().len(), before.hands[seat].len() - 1);
            if resolved {
                let trick = game.tricks().last().unwrap();
                assert_eq!(game.current_player(), trick.winner);
                assert_eq!(game.current_trick(), before.current_trick + 1);
                assert!(game.center().is_empty());
            } else {
                assert_eq!(game.current_player(), rules::next_seat(seat));
                assert_eq!(game.center().last(), Some(&card));
            }
        }
    }
}

fn check_draw(before: &GameSnapshot, game: &Game, outcome: DrawOutcome) {
    let seat = before.current_player;
    match outcome {
        DrawOutcome::Drew(card) => {
            assert_eq!(before.deck.first(), Some(&card));
            assert_eq!(game.current_player(), seat);
            assert_eq!(game.hand(seat).unwrap().len(), before.hands[seat].len() + 1);
        }
        DrawOutcome::DeckEmptyTurnSkipped => {
            assert!(before.deck.is_empty());
            assert_eq!(game.current_player(), rules::next_seat(seat));
            assert_eq!(game.snapshot().hands, before.hands);
        }
    }
}

fn check_game_over(game: &Game) {
    let first_empty = game.hands().iter().position(goboom::Hand::is_empty);
    assert_eq!(game.winner(), first_empty);
    assert_eq!(game.is_game_over(), first_empty.is_some());
}

proptest! {
    #[test]
    fn random_games_keep_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..300),
    ) {
        let mut game = Game::new(GameOptions::default(), seed);
        game.start_new_game().unwrap();
        assert_conserved(&game);

        for action in actions {
            if game.state() != GameState::InProgress {
                break;
            }

            let before = game.snapshot();
            match chosen_card(&game, action) {
                Some(card) => {
                    let result = game.play_card(card).map(|outcome| outcome.trick.is_some());
                    check_play(&before, &game, card, result);
                }
                None => {
                    let outcome = game.draw_card().unwrap();
                    check_draw(&before, &game, outcome);
                }
            }

            assert_conserved(&game);
            check_game_over(&game);

            let scores = game.scores();
            for seat in 0..PLAYER_COUNT {
                prop_assert!(scores[seat] >= before.scores[seat]);
            }
            prop_assert_eq!(scores.iter().sum::<u32>() as usize, game.tricks().len());
        }
    }
}
