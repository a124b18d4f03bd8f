//! Turn state machine integration tests.
//!
//! Games here use a `ScriptedRoller`, so every start roll and dice roll is
//! known in advance. With zero pacing, one `advance` resolves any timed
//! stage; tests that care about timing use explicit durations.

use abagio::board::{Motion, PathTopology};
use abagio::core::{
    Color, CommandError, FrogId, GameConfig, GameEvent, MoveRejection, ScriptedRoller, TokenId,
};
use abagio::dice::TokenState;
use abagio::game::{Game, Phase, Prompt};

/// A game with `script` as its dice, already past the start roll.
///
/// The first two faces of `script` are the start roll.
fn started(config: GameConfig, script: &[u8]) -> Game<ScriptedRoller> {
    let roller = ScriptedRoller::new(script.iter().copied());
    let mut game = Game::with_roller(config, roller).unwrap();
    game.start_roll(Color::Red).unwrap();
    game.start_roll(Color::Purple).unwrap();
    game.advance(10.0);
    assert_eq!(game.phase(), Phase::AwaitingDiceRoll);
    game
}

fn roll(game: &mut Game<ScriptedRoller>) -> [u8; 2] {
    game.roll_dice().unwrap();
    game.stop_dice_animation().unwrap()
}

fn top_of(game: &Game<ScriptedRoller>, label: &str) -> FrogId {
    game.board().unwrap().stack_at(label).unwrap().top().unwrap().frog
}

fn paced() -> GameConfig {
    GameConfig::instant(0)
        .with_step_duration(0.5)
        .with_slide_duration(0.5)
}

// =============================================================================
// Start roll
// =============================================================================

/// Ties force a reroll; the higher final roll goes first.
#[test]
fn test_start_roll_tie_then_red_wins() {
    let mut game = Game::with_roller(
        GameConfig::instant(0),
        ScriptedRoller::new([4, 4, 5, 2]),
    )
    .unwrap();

    assert_eq!(game.start_roll(Color::Red), Ok(4));
    assert_eq!(game.start_roll(Color::Purple), Ok(4));
    assert_eq!(game.phase(), Phase::AwaitingStartRoll);
    assert_eq!(game.prompt(), Prompt::StartRollTie { face: 4 });
    assert_eq!(game.start_rolls().ties(), 1);

    assert_eq!(game.start_roll(Color::Red), Ok(5));
    assert_eq!(game.start_roll(Color::Purple), Ok(2));
    assert_eq!(game.phase(), Phase::SettingUpBoard);
    assert_eq!(game.current_color(), Color::Red);
    assert!(game.history().contains(&GameEvent::StartRollTie { face: 4 }));
    assert!(game
        .history()
        .contains(&GameEvent::BoardSetUp { first: Color::Red }));
}

#[test]
fn test_purple_wins_start_roll() {
    let game = started(GameConfig::instant(0), &[2, 6]);
    assert_eq!(game.current_color(), Color::Purple);
    let board = game.board().unwrap();
    let sw = board.topology().by_label("sw").unwrap();
    assert_eq!(board.topology().root(Color::Purple), sw);
    assert_eq!(
        game.prompt().to_string(),
        "Purple player will go first. Purple player, please roll."
    );
}

#[test]
fn test_start_roll_out_of_order() {
    let mut game = Game::with_roller(GameConfig::instant(0), ScriptedRoller::new([3])).unwrap();
    assert_eq!(game.start_roll(Color::Purple), Err(CommandError::WrongColor));
    assert_eq!(game.last_rejection(), Some(CommandError::WrongColor));
    assert_eq!(game.roller().rolls_made(), 0);

    game.start_roll(Color::Red).unwrap();
    assert_eq!(game.last_rejection(), None);
    assert_eq!(game.start_roll(Color::Red), Err(CommandError::WrongColor));
}

// =============================================================================
// Dice and tokens
// =============================================================================

/// Doubles give four tokens and the turn only ends once all four are spent.
#[test]
fn test_doubles_four_moves() {
    let mut game = started(GameConfig::instant(0), &[6, 1, 3, 3]);
    assert_eq!(roll(&mut game), [3, 3]);
    assert_eq!(game.dice().tokens().len(), 4);
    assert!(matches!(game.prompt(), Prompt::ChooseDie { doubles: true, first_choice: true, .. }));

    for i in 0..4u8 {
        assert_eq!(game.phase(), Phase::AwaitingSelection);
        game.select_token(TokenId(i)).unwrap();
        let frog = top_of(&game, "sw");
        game.select_frog(frog).unwrap();
        game.advance(1.0);
        assert_eq!(
            game.board().unwrap().frog(frog).unwrap().space,
            PathTopology::main_track(3)
        );
        if i < 3 {
            assert_eq!(game.current_color(), Color::Red);
            assert_eq!(game.dice().remaining(), 3 - i as usize);
        }
    }

    assert_eq!(game.phase(), Phase::AwaitingDiceRoll);
    assert_eq!(game.current_color(), Color::Purple);
    assert!(game.dice().tokens().is_empty());
    assert_eq!(game.turns(), 1);
    assert_eq!(game.board().unwrap().stack_at("3").unwrap().len(), 4);
}

#[test]
fn test_turn_passes_after_two_moves() {
    let mut game = started(GameConfig::instant(0), &[6, 1, 2, 3]);
    assert_eq!(roll(&mut game), [2, 3]);

    for token in [TokenId(0), TokenId(1)] {
        game.select_token(token).unwrap();
        let frog = top_of(&game, "sw");
        game.select_frog(frog).unwrap();
        game.advance(1.0);
    }
    assert_eq!(game.phase(), Phase::AwaitingDiceRoll);
    assert_eq!(game.current_color(), Color::Purple);
    assert!(game
        .history()
        .contains(&GameEvent::TurnStarted { color: Color::Purple }));
}

#[test]
fn test_select_and_deselect() {
    let mut game = started(GameConfig::instant(0), &[6, 1, 2, 5]);
    assert_eq!(roll(&mut game), [2, 5]);

    game.select_token(TokenId(0)).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingFrogClick);
    let prompt = game.prompt();
    assert!(matches!(prompt, Prompt::ChooseFrog { can_reselect: true, .. }));
    assert!(prompt
        .to_string()
        .ends_with("(Click the selected die again to choose a different one.)"));

    // the other die only becomes available after deselecting
    assert_eq!(game.select_token(TokenId(1)), Err(CommandError::InvalidSelection));
    assert_eq!(game.phase(), Phase::AwaitingFrogClick);
    assert_eq!(game.dice().selected(), Some(TokenId(0)));

    game.select_token(TokenId(0)).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.dice().selected(), None);
    assert_eq!(game.dice().token(TokenId(0)).unwrap().state, TokenState::Unused);

    game.select_token(TokenId(1)).unwrap();
    assert_eq!(game.dice().selected_token().unwrap().value, 5);
}

#[test]
fn test_expended_token_cannot_be_selected() {
    let mut game = started(GameConfig::instant(0), &[6, 1, 2, 5]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();
    game.select_frog(top_of(&game, "sw")).unwrap();
    game.advance(1.0);

    assert_eq!(game.dice().token(TokenId(0)).unwrap().state, TokenState::Expended);
    assert_eq!(game.select_token(TokenId(0)), Err(CommandError::InvalidSelection));
    assert_eq!(game.phase(), Phase::AwaitingSelection);
}

// =============================================================================
// Frog selection
// =============================================================================

#[test]
fn test_illegal_target_keeps_selection() {
    // red first, dice 4 and 2
    let mut game = started(GameConfig::instant(0), &[6, 1, 4, 2]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();

    let purple = top_of(&game, "se");
    assert_eq!(game.select_frog(purple), Err(CommandError::WrongColor));
    assert_eq!(game.phase(), Phase::AwaitingFrogClick);
    assert_eq!(game.dice().selected(), Some(TokenId(0)));
    assert!(game.prompt().to_string().starts_with("Invalid target."));

    let plan = game.select_frog(top_of(&game, "sw")).unwrap();
    assert_eq!(plan.destination, PathTopology::main_track(4));
    assert_eq!(game.last_rejection(), None);
}

#[test]
fn test_covered_frog_is_rejected() {
    let mut game = started(GameConfig::instant(0), &[6, 1, 6, 6]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();

    let covered = game.board().unwrap().stack_at("sw").unwrap().occupants()[0].frog;
    assert_eq!(
        game.select_frog(covered),
        Err(CommandError::Move(MoveRejection::Covered))
    );
    assert_eq!(
        game.last_rejection(),
        Some(CommandError::Move(MoveRejection::Covered))
    );
    assert!(game.history().contains(&GameEvent::Rejected {
        error: CommandError::Move(MoveRejection::Covered)
    }));
}

/// Red goes first and rolls a 5: the top Red frog on `sw` lands on space 5,
/// where a lone Purple frog tops the opening stack.
#[test]
fn test_capture_from_root() {
    let mut game = started(GameConfig::instant(0), &[6, 1, 5, 2]);
    assert_eq!(roll(&mut game), [5, 2]);
    game.select_token(TokenId(0)).unwrap();

    let victim = top_of(&game, "5");
    let mover = top_of(&game, "sw");
    let plan = game.select_frog(mover).unwrap();
    assert_eq!(plan.captures(), Some(victim));

    game.advance(1.0);
    let board = game.board().unwrap();
    assert_eq!(board.frog(victim).unwrap().space, board.topology().root(Color::Purple));
    assert_eq!(board.frog(victim).unwrap().motion, Motion::Idle);
    assert_eq!(board.stack_at("se").unwrap().len(), 7);
    assert_eq!(board.stack_at("5").unwrap().top().unwrap().frog, mover);
    assert!(game.history().iter().any(|e| matches!(
        e,
        GameEvent::FrogCaptured { frog, by, .. } if *frog == victim && *by == mover
    )));
}

// =============================================================================
// Animation pacing
// =============================================================================

#[test]
fn test_input_ignored_while_moving() {
    let mut game = started(paced(), &[6, 1, 4, 2]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();
    game.select_frog(top_of(&game, "sw")).unwrap();
    assert_eq!(game.phase(), Phase::MoveAnimating);
    assert_eq!(game.prompt(), Prompt::Moving);

    let events = game.history().len();
    assert!(matches!(
        game.select_token(TokenId(1)),
        Err(CommandError::UnexpectedInput { phase: Phase::MoveAnimating, .. })
    ));
    assert!(game.roll_dice().is_err());
    assert!(game.stop_dice_animation().is_err());
    assert!(game.select_frog(top_of(&game, "se")).is_err());
    assert!(game.start_roll(Color::Red).is_err());
    assert_eq!(game.history().len(), events);
    assert_eq!(game.last_rejection(), None);
    assert_eq!(game.phase(), Phase::MoveAnimating);
}

#[test]
fn test_long_advance_while_dice_roll() {
    let config = GameConfig::instant(0).with_die_shake_interval(0.075);
    let mut game = started(config, &[6, 1, 2, 5]);
    game.roll_dice().unwrap();

    game.advance(1e9);
    game.advance(f64::MAX);
    assert_eq!(game.phase(), Phase::DiceRolling);

    let faces = game.stop_dice_animation().unwrap();
    assert!(faces.iter().all(|f| (1..=6).contains(f)));
    assert_eq!(game.phase(), Phase::AwaitingSelection);
}

#[test]
fn test_zero_advance_changes_nothing() {
    let mut game = started(paced(), &[6, 1, 4, 2]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();
    game.select_frog(top_of(&game, "sw")).unwrap();
    game.advance(0.7);

    let before = game.snapshot();
    game.advance(0.0);
    game.advance(-1.0);
    game.advance(f64::NAN);
    game.advance(f64::INFINITY);
    assert_eq!(game.snapshot(), before);
}

/// However the time is sliced, the frog ends exactly at the destination.
#[test]
fn test_lands_exactly_after_small_advances() {
    let mut game = started(paced(), &[6, 1, 4, 2]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();
    let frog = top_of(&game, "sw");
    let origin = game.board().unwrap().frog(frog).unwrap().space;
    game.select_frog(frog).unwrap();

    let mut frames = 0;
    while game.phase() == Phase::MoveAnimating {
        game.advance(0.013);
        frames += 1;
        assert!(frames < 1000);
    }
    assert!(frames > 100);

    let board = game.board().unwrap();
    let expected = board.topology().destination(origin, Color::Red, 4);
    assert_eq!(Some(board.frog(frog).unwrap().space), expected);
    assert_eq!(board.frog(frog).unwrap().motion, Motion::Idle);
}

#[test]
fn test_board_unchanged_until_landing() {
    let mut game = started(paced(), &[6, 1, 4, 2]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();
    let frog = top_of(&game, "sw");
    game.select_frog(frog).unwrap();

    game.advance(1.9);
    let board = game.board().unwrap();
    assert_eq!(board.stack_at("sw").unwrap().top().unwrap().frog, frog);
    assert_eq!(
        board.frog(frog).unwrap().motion,
        Motion::SteppingForward { remaining: 1 }
    );
    let view = game.animation_view().unwrap();
    assert_eq!(view.spaces.len(), 5);
    assert_eq!(view.step, 3);

    game.advance(0.25);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert!(game.board().unwrap().stack_at("4").unwrap().is_on_top(frog));
}

#[test]
fn test_render_order_during_capture() {
    let mut game = started(paced(), &[6, 1, 5, 2]);
    roll(&mut game);
    game.select_token(TokenId(0)).unwrap();
    let victim = top_of(&game, "5");
    let mover = top_of(&game, "sw");
    game.select_frog(mover).unwrap();

    let order = game.render_order();
    assert_eq!(order.len(), 24);
    assert_eq!(order.last(), Some(&mover));

    // all five steps taken, victim sliding home
    game.advance(2.6);
    assert_eq!(game.phase(), Phase::MoveAnimating);
    assert_eq!(
        game.board().unwrap().frog(victim).unwrap().motion,
        Motion::SlidingHome
    );
    let order = game.render_order();
    assert_eq!(&order[22..], &[victim, mover]);

    game.advance(0.5);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert!(game.animation().is_none());
}
