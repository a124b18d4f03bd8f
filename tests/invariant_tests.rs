//! Reachable-state invariants, checked over random command sequences.
//!
//! Whatever the players click and however time is sliced, the board must
//! stay within capacity, keep twelve frogs per color, and agree with itself
//! about where every frog is.

use proptest::prelude::*;

use abagio::core::{Color, GameConfig, GameEvent, TokenId};
use abagio::dice::TokenState;
use abagio::game::{Game, Phase, FROGS_PER_COLOR};
use abagio::FrogId;

#[derive(Clone, Debug)]
enum Command {
    StartRoll(Color),
    RollDice,
    StopDice,
    SelectToken(u8),
    SelectFrog(u8),
    /// Pick the n-th legal move for the selected token, if any.
    SelectLegal(usize),
    Advance(f64),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        prop_oneof![Just(Color::Red), Just(Color::Purple)].prop_map(Command::StartRoll),
        Just(Command::RollDice),
        Just(Command::StopDice),
        (0u8..5).prop_map(Command::SelectToken),
        (0u8..26).prop_map(Command::SelectFrog),
        (0usize..12).prop_map(Command::SelectLegal),
        (0.0f64..0.6).prop_map(Command::Advance),
    ]
}

fn config(seed: u64) -> GameConfig {
    GameConfig::new(seed)
        .with_step_duration(0.1)
        .with_slide_duration(0.15)
        .with_die_shake_interval(0.05)
        .with_setup_delay(0.2)
}

fn apply(game: &mut Game, command: &Command) {
    // refusals are part of normal play
    let _ = match *command {
        Command::StartRoll(color) => game.start_roll(color).map(|_| ()),
        Command::RollDice => game.roll_dice(),
        Command::StopDice => game.stop_dice_animation().map(|_| ()),
        Command::SelectToken(id) => game.select_token(TokenId(id)),
        Command::SelectFrog(id) => game.select_frog(FrogId(id)).map(|_| ()),
        Command::SelectLegal(n) => {
            let legal = match (game.board(), game.dice().selected_token()) {
                (Some(board), Some(token)) if game.phase() == Phase::AwaitingFrogClick => {
                    board.legal_moves(game.current_color(), token.value)
                }
                _ => Vec::new(),
            };
            match legal.get(n % legal.len().max(1)) {
                Some(plan) => game.select_frog(plan.frog).map(|_| ()),
                None => Ok(()),
            }
        }
        Command::Advance(dt) => {
            game.advance(dt);
            Ok(())
        }
    };
}

fn check(game: &Game) {
    if let Some(board) = game.board() {
        assert!(board.is_consistent());
        for color in Color::ALL {
            assert_eq!(board.frog_count(color), FROGS_PER_COLOR);
        }
        for space in board.topology().spaces() {
            if let Some(cap) = space.kind.capacity() {
                assert!(board.stack(space.id).len() <= cap, "{} over capacity", space.label);
            }
        }
    }

    let selected = game
        .dice()
        .tokens()
        .iter()
        .filter(|t| t.state == TokenState::Selected)
        .count();
    match game.phase() {
        Phase::AwaitingFrogClick | Phase::MoveAnimating => assert_eq!(selected, 1),
        _ => assert_eq!(selected, 0),
    }
    assert_eq!(game.animation().is_some(), game.phase() == Phase::MoveAnimating);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_board_invariants_hold(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..300),
    ) {
        let mut game = Game::new(config(seed)).unwrap();
        for command in &commands {
            apply(&mut game, command);
            check(&game);
        }
    }

    #[test]
    fn prop_zero_advance_is_idempotent(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..150),
    ) {
        let mut game = Game::new(config(seed)).unwrap();
        for command in &commands {
            apply(&mut game, command);
            let before = game.snapshot();
            let phase = game.phase();
            game.advance(0.0);
            prop_assert_eq!(game.snapshot(), before);
            prop_assert_eq!(game.phase(), phase);
        }
    }
}

/// Drive a whole game with legal moves only until a player is stuck (the
/// engine never skips a turn) or enough turns have passed.
fn autoplay(seed: u64, max_turns: u32) -> Game {
    let mut game = Game::new(config(seed)).unwrap();
    while game.phase() == Phase::AwaitingStartRoll {
        let color = game.start_rolls().next_roller();
        game.start_roll(color).unwrap();
    }

    for _ in 0..10_000 {
        if game.turns() >= max_turns {
            break;
        }
        match game.phase() {
            Phase::SettingUpBoard | Phase::MoveAnimating => game.advance(0.05),
            Phase::AwaitingDiceRoll => {
                game.roll_dice().unwrap();
                game.advance(0.3);
                game.stop_dice_animation().unwrap();
            }
            Phase::AwaitingSelection => {
                let board = game.board().unwrap();
                let color = game.current_color();
                let playable = game.dice().tokens().iter().find(|t| {
                    t.state == TokenState::Unused && !board.legal_moves(color, t.value).is_empty()
                });
                let Some(token) = playable.map(|t| t.id) else {
                    break;
                };
                game.select_token(token).unwrap();
            }
            Phase::AwaitingFrogClick => {
                let value = game.dice().selected_token().unwrap().value;
                let plan = game.board().unwrap().legal_moves(game.current_color(), value)[0].clone();
                game.select_frog(plan.frog).unwrap();
            }
            phase => panic!("unexpected phase {phase:?}"),
        }
        check(&game);
    }
    game
}

#[test]
fn test_autoplay_keeps_invariants() {
    for seed in 0..8 {
        let game = autoplay(seed, 40);
        assert!(game.turns() > 0 || game.phase() == Phase::AwaitingSelection);
    }
}

#[test]
fn test_same_seed_same_game() {
    let a = autoplay(99, 10);
    let b = autoplay(99, 10);
    assert_eq!(a.history(), b.history());
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_history_records_moves() {
    let game = autoplay(3, 4);
    let started = game
        .history()
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveStarted { .. }))
        .count();
    let finished = game
        .history()
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveFinished { .. }))
        .count();
    assert!(started > 0);
    assert!(started - finished <= 1);
}

#[test]
fn test_snapshot_serializes() {
    let game = autoplay(5, 2);
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["board"]["spaces"].as_array().unwrap().len(), 36);
    assert!(json["prompt"].is_string());
    assert!(json["render_order"].as_array().unwrap().len() == 24);

    let history = serde_json::to_string(game.history()).unwrap();
    assert!(history.contains("BoardSetUp"));
}
