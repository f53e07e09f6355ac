//! Property tests: arbitrary (mostly illegal) action sequences never break
//! the structural invariants, and a rejected action never changes state.

use budalla::{Card, Game, GameError, DECK_SIZE};
use proptest::prelude::*;
use std::collections::HashSet;

fn assert_invariants(game: &Game) {
    let held: usize = game.players().iter().map(|p| p.hand_size()).sum();
    assert_eq!(
        game.deck_count() + held + game.table_attack().len() + game.table_defense().len()
            + game.discard_count(),
        DECK_SIZE
    );
    assert_eq!(game.table_defense().len() % 2, 0);
    assert_ne!(game.attacker().name(), game.defender().name());

    let unique: HashSet<&String> = game.winners().iter().collect();
    assert_eq!(unique.len(), game.winners().len());
    if !game.deck_is_empty() {
        assert!(game.winners().is_empty());
    }
}

/// Pick the `i % len`-th element, if any.
fn pick<T: Copy>(items: &[T], i: u8) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[i as usize % items.len()])
    }
}

/// Interpret one fuzz move against the current state. Most of these are
/// illegal; that is the point.
fn apply_move(game: &mut Game, verb: u8, a: u8, b: u8) -> Result<(), GameError> {
    let actor = match verb % 3 {
        0 => game.active_attacker().name().to_string(),
        1 => game.defender().name().to_string(),
        _ => game.players()[b as usize % game.players().len()]
            .name()
            .to_string(),
    };
    let hand: Vec<Card> = game.player(&actor).map(|p| p.hand().to_vec()).unwrap_or_default();

    match verb % 5 {
        0 => {
            let Some(card) = pick(&hand, a) else {
                return Ok(());
            };
            game.attack(card, &actor)
        }
        1 => {
            let attacks: Vec<Card> = game.table_attack().to_vec();
            let (Some(attack), Some(defense)) = (pick(&attacks, a), pick(&hand, b)) else {
                return Ok(());
            };
            game.defend(attack, defense, &actor)
        }
        2 => game.skip_attack_turn(&actor),
        3 => {
            let Some(card) = pick(&hand, a) else {
                return Ok(());
            };
            game.pass_attack(card, &actor)
        }
        _ => game.action_take(&actor),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_play_never_breaks_invariants(
        seed in any::<u64>(),
        player_count in 2usize..=5,
        moves in prop::collection::vec((any::<u8>(), any::<u8>(), any::<u8>()), 1..300),
    ) {
        let names: Vec<String> = (0..player_count).map(|i| format!("p{i}")).collect();
        let mut game = Game::with_seed(names, seed).unwrap();
        assert_invariants(&game);

        for (verb, a, b) in moves {
            if game.check_loser(None).is_some() {
                break;
            }

            let before = game.clone();
            match apply_move(&mut game, verb, a, b) {
                Ok(()) => assert_invariants(&game),
                Err(_) => prop_assert_eq!(&game, &before, "a rejected action must not mutate"),
            }
        }
    }

    #[test]
    fn rejected_constructions_have_the_right_error(count in 0usize..10) {
        let names: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
        let result = Game::with_seed(names, 1);

        if (2..=5).contains(&count) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), GameError::InvalidPlayerCount(count));
        }
    }
}
