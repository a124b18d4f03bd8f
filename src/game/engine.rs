//! The game engine: one explicit aggregate owning all state, with a
//! command surface for the input layer and a query surface for the view.
//!
//! ## Commands
//!
//! | command                  | accepted in                              |
//! |--------------------------|------------------------------------------|
//! | `start_roll(color)`      | `AwaitingStartRoll`                      |
//! | `roll_dice()`            | `AwaitingDiceRoll`                       |
//! | `stop_dice_animation()`  | `DiceRolling`                            |
//! | `select_token(id)`       | `AwaitingSelection`, `AwaitingFrogClick` |
//! | `select_frog(id)`        | `AwaitingFrogClick`                      |
//! | `advance(dt)`            | always                                   |
//!
//! A command outside its phase returns `UnexpectedInput` and changes
//! nothing. A refused command in its phase (wrong color, illegal target)
//! also changes nothing, but is remembered as the last rejection and
//! appended to the history so the view can explain it.

use im::Vector;
use serde::Serialize;
use tracing::{debug, info};

use super::animation::{AnimationView, MoveAnimation};
use super::phase::Phase;
use super::prompt::Prompt;
use super::setup::{set_up_board, StartRoll, StartRollOutcome};
use crate::board::{Board, BoardSnapshot, Motion, MovePlan};
use crate::core::{
    Color, CommandError, ConfigError, DieRoller, FrogId, GameConfig, GameEvent, GameRng, TokenId,
};
use crate::dice::{Dice, MoveToken, TokenState};

/// Everything the view needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub current: Color,
    pub faces: [u8; 2],
    pub rolling: bool,
    pub tokens: Vec<MoveToken>,
    pub board: Option<BoardSnapshot>,
    pub animation: Option<AnimationView>,
    pub render_order: Vec<FrogId>,
    pub last_rejection: Option<CommandError>,
    pub prompt: String,
}

/// A single game of Abagio.
#[derive(Clone, Debug)]
pub struct Game<R: DieRoller = GameRng> {
    config: GameConfig,
    roller: R,
    phase: Phase,
    current: Color,
    start_roll: StartRoll,
    last_tie: Option<u8>,
    /// Built once the start roll decides who owns which root.
    board: Option<Board>,
    dice: Dice,
    animation: Option<MoveAnimation>,
    setup_elapsed: f64,
    last_rejection: Option<CommandError>,
    history: Vector<GameEvent>,
    turns: u32,
}

impl Game<GameRng> {
    /// Create a game rolling with a `GameRng` seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let roller = GameRng::new(config.seed);
        Self::with_roller(config, roller)
    }
}

impl<R: DieRoller> Game<R> {
    /// Create a game rolling with `roller`.
    pub fn with_roller(config: GameConfig, roller: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            roller,
            phase: Phase::AwaitingStartRoll,
            current: Color::Red,
            start_roll: StartRoll::new(),
            last_tie: None,
            board: None,
            dice: Dice::new(),
            animation: None,
            setup_elapsed: 0.0,
            last_rejection: None,
            history: Vector::new(),
            turns: 0,
        })
    }

    /// Return to the freshly created state. Config and roller are kept; the
    /// roller is not rewound.
    pub fn reset(&mut self) {
        self.phase = Phase::AwaitingStartRoll;
        self.current = Color::Red;
        self.start_roll = StartRoll::new();
        self.last_tie = None;
        self.board = None;
        self.dice = Dice::new();
        self.animation = None;
        self.setup_elapsed = 0.0;
        self.last_rejection = None;
        self.history = Vector::new();
        self.turns = 0;
        debug!("game reset");
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Roll one die for position as `color`. Returns the face rolled.
    pub fn start_roll(&mut self, color: Color) -> Result<u8, CommandError> {
        self.expect_phase("start_roll", |p| p == Phase::AwaitingStartRoll)?;
        if color != self.start_roll.next_roller() {
            return Err(self.reject(CommandError::WrongColor));
        }

        let face = self.roller.roll_die();
        let outcome = self.start_roll.record(color, face)?;
        self.accept(GameEvent::StartRoll { color, face });

        match outcome {
            StartRollOutcome::Waiting(_) => {
                self.last_tie = None;
            }
            StartRollOutcome::Tie(face) => {
                info!(face, "start roll tied");
                self.last_tie = Some(face);
                self.history.push_back(GameEvent::StartRollTie { face });
            }
            StartRollOutcome::Decided { first, faces } => {
                info!(%first, red = faces[0], purple = faces[1], "start roll decided");
                self.last_tie = None;
                self.current = first;
                self.board = Some(set_up_board(first));
                self.setup_elapsed = 0.0;
                self.phase = Phase::SettingUpBoard;
                self.history.push_back(GameEvent::BoardSetUp { first });
            }
        }
        Ok(face)
    }

    /// Start the dice rolling for the current player.
    pub fn roll_dice(&mut self) -> Result<(), CommandError> {
        self.expect_phase("roll_dice", |p| p == Phase::AwaitingDiceRoll)?;
        self.dice.start_rolling(&mut self.roller);
        self.phase = Phase::DiceRolling;
        self.last_rejection = None;
        debug!(color = %self.current, "dice rolling");
        Ok(())
    }

    /// Stop the dice. Their faces become this turn's tokens.
    pub fn stop_dice_animation(&mut self) -> Result<[u8; 2], CommandError> {
        self.expect_phase("stop_dice_animation", |p| p == Phase::DiceRolling)?;
        let faces = self.dice.stop_rolling();
        self.phase = Phase::AwaitingSelection;
        self.accept(GameEvent::DiceRolled {
            color: self.current,
            faces,
        });
        debug!(color = %self.current, ?faces, doubles = self.dice.is_doubles(), "dice stopped");
        Ok(faces)
    }

    /// Click a token. Clicking the selected token deselects it.
    pub fn select_token(&mut self, id: TokenId) -> Result<(), CommandError> {
        self.expect_phase("select_token", Phase::is_choosing)?;

        if self.dice.selected() == Some(id) {
            self.dice.deselect();
            self.phase = Phase::AwaitingSelection;
            self.accept(GameEvent::TokenDeselected { token: id });
            return Ok(());
        }

        if let Err(error) = self.dice.select(id) {
            return Err(self.reject(error));
        }
        let value = self.dice.token(id).map_or(0, |t| t.value);
        self.phase = Phase::AwaitingFrogClick;
        self.accept(GameEvent::TokenSelected { token: id, value });
        Ok(())
    }

    /// Click a frog to move it by the selected token's value.
    ///
    /// On success the move starts animating and its plan is returned. On
    /// failure the selection stays so the player can pick another frog.
    pub fn select_frog(&mut self, id: FrogId) -> Result<MovePlan, CommandError> {
        self.expect_phase("select_frog", |p| p == Phase::AwaitingFrogClick)?;

        let planned = match (&self.board, self.dice.selected_token()) {
            (Some(board), Some(token)) => match board.frog(id) {
                None => Err(CommandError::UnknownFrog),
                Some(frog) if frog.color != self.current => Err(CommandError::WrongColor),
                Some(_) => board.attempt_move(id, token.value).map_err(CommandError::from),
            },
            _ => Err(CommandError::UnexpectedInput {
                command: "select_frog",
                phase: self.phase,
            }),
        };
        let plan = match planned {
            Ok(plan) => plan,
            Err(error) => return Err(self.reject(error)),
        };

        if let Some(board) = self.board.as_mut() {
            self.animation = Some(MoveAnimation::start(plan.clone(), board));
        }
        self.phase = Phase::MoveAnimating;
        self.accept(GameEvent::MoveStarted {
            frog: plan.frog,
            from: plan.origin,
            to: plan.destination,
            steps: plan.steps(),
        });
        debug!(frog = %plan.frog, from = %plan.origin, to = %plan.destination, "move accepted");
        Ok(plan)
    }

    /// Let `dt` seconds of game time pass.
    ///
    /// Drives the setup pause, the dice shake and move animations. A
    /// non-positive or non-finite `dt` does nothing.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 || !self.phase.is_timed() {
            return;
        }
        match self.phase {
            Phase::SettingUpBoard => {
                self.setup_elapsed += dt;
                if self.setup_elapsed >= self.config.setup_delay {
                    self.start_turn();
                }
            }
            Phase::DiceRolling => {
                self.dice
                    .shake(dt, self.config.die_shake_interval, &mut self.roller);
            }
            Phase::MoveAnimating => self.advance_move(dt),
            _ => {}
        }
    }

    fn advance_move(&mut self, dt: f64) {
        let (Some(animation), Some(board)) = (self.animation.as_mut(), self.board.as_mut()) else {
            return;
        };
        let landed_before = animation.has_landed();
        animation.advance(dt, &self.config, board);
        let done = animation.is_done();

        if !landed_before && animation.has_landed() {
            let plan = animation.plan().clone();
            self.history.push_back(GameEvent::FrogLanded {
                frog: plan.frog,
                space: plan.destination,
            });
            if let Some(victim) = plan.captures() {
                self.history.push_back(GameEvent::FrogCaptured {
                    frog: victim,
                    by: plan.frog,
                    space: plan.destination,
                });
            }
        }
        if done {
            self.finish_move();
        }
    }

    fn finish_move(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        let frog = animation.plan().frog;
        if let Some(token) = self.dice.expend_selected() {
            self.history.push_back(GameEvent::MoveFinished {
                frog,
                token: token.id,
            });
        }

        if self.dice.all_expended() {
            self.dice.clear_tokens();
            self.current = self.current.opponent();
            self.turns += 1;
            self.start_turn();
        } else {
            self.phase = Phase::AwaitingSelection;
            debug!(remaining = self.dice.remaining(), "move finished");
        }
    }

    fn start_turn(&mut self) {
        self.phase = Phase::AwaitingDiceRoll;
        self.history.push_back(GameEvent::TurnStarted {
            color: self.current,
        });
        info!(color = %self.current, turn = self.turns, "turn started");
    }

    fn expect_phase(
        &self,
        command: &'static str,
        allowed: impl FnOnce(Phase) -> bool,
    ) -> Result<(), CommandError> {
        if allowed(self.phase) {
            Ok(())
        } else {
            debug!(command, phase = ?self.phase, "input ignored");
            Err(CommandError::UnexpectedInput {
                command,
                phase: self.phase,
            })
        }
    }

    fn accept(&mut self, event: GameEvent) {
        self.last_rejection = None;
        self.history.push_back(event);
    }

    fn reject(&mut self, error: CommandError) -> CommandError {
        debug!(%error, phase = ?self.phase, "command rejected");
        if error.is_player_facing() {
            self.last_rejection = Some(error);
            self.history.push_back(GameEvent::Rejected { error });
        }
        error
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn roller(&self) -> &R {
        &self.roller
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The color on turn. Before the start roll is decided this is Red.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// The board, once the start roll has been decided.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn start_rolls(&self) -> &StartRoll {
        &self.start_roll
    }

    #[must_use]
    pub fn animation(&self) -> Option<&MoveAnimation> {
        self.animation.as_ref()
    }

    #[must_use]
    pub fn animation_view(&self) -> Option<AnimationView> {
        self.animation.as_ref().map(|a| a.view(&self.config))
    }

    #[must_use]
    pub fn last_rejection(&self) -> Option<CommandError> {
        self.last_rejection
    }

    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Completed turns since the board was set up.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Instruction for the players.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        let color = self.current;
        match self.phase {
            Phase::AwaitingStartRoll => match self.last_tie {
                Some(face) => Prompt::StartRollTie { face },
                None => Prompt::RollForPosition {
                    color: self.start_roll.next_roller(),
                    first_time: self.history.is_empty() || self.only_rejections(),
                },
            },
            Phase::SettingUpBoard => Prompt::SettingUp { first: color },
            Phase::AwaitingDiceRoll => Prompt::RollDice {
                color,
                goes_first: self.turns == 0,
            },
            Phase::DiceRolling => Prompt::Rolling { color },
            Phase::AwaitingSelection => Prompt::ChooseDie {
                color,
                doubles: self.dice.is_doubles(),
                first_choice: self
                    .dice
                    .tokens()
                    .iter()
                    .all(|t| t.state == TokenState::Unused),
            },
            Phase::AwaitingFrogClick => Prompt::ChooseFrog {
                color,
                can_reselect: self.can_reselect(),
                invalid_target: matches!(
                    self.last_rejection,
                    Some(
                        CommandError::Move(_)
                            | CommandError::WrongColor
                            | CommandError::UnknownFrog
                    )
                ),
            },
            Phase::MoveAnimating => Prompt::Moving,
        }
    }

    fn only_rejections(&self) -> bool {
        self.history
            .iter()
            .all(|e| matches!(e, GameEvent::Rejected { .. }))
    }

    /// Whether an unused token from the other die could be picked after
    /// deselecting the current one.
    fn can_reselect(&self) -> bool {
        let Some(selected) = self.dice.selected_token() else {
            return false;
        };
        self.dice
            .tokens()
            .iter()
            .any(|t| t.state == TokenState::Unused && t.die != selected.die)
    }

    /// Frogs in drawing order, first drawn first.
    ///
    /// Stationary frogs go by stack layer. A frog sliding home is drawn over
    /// them, and the moving frog over everything, so a capturer always
    /// covers the frog it sends home.
    #[must_use]
    pub fn render_order(&self) -> Vec<FrogId> {
        let Some(board) = &self.board else {
            return Vec::new();
        };
        let mover = self.animation.as_ref().map(|a| a.plan().frog);

        let mut frogs: Vec<_> = board
            .frogs()
            .iter()
            .map(|f| {
                let band = if Some(f.id) == mover {
                    2
                } else if f.motion == Motion::SlidingHome {
                    1
                } else {
                    0
                };
                ((band, f.layer, f.id), f.id)
            })
            .collect();
        frogs.sort_unstable_by_key(|(key, _)| *key);
        frogs.into_iter().map(|(_, id)| id).collect()
    }

    /// Copy out everything the view draws.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            current: self.current,
            faces: self.dice.faces(),
            rolling: self.dice.is_rolling(),
            tokens: self.dice.tokens().to_vec(),
            board: self.board.as_ref().map(Board::snapshot),
            animation: self.animation_view(),
            render_order: self.render_order(),
            last_rejection: self.last_rejection,
            prompt: self.prompt().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveRejection, ScriptedRoller};

    fn game(script: &[u8]) -> Game<ScriptedRoller> {
        Game::with_roller(GameConfig::instant(0), ScriptedRoller::new(script.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(GameConfig::new(42)).unwrap();
        assert_eq!(game.phase(), Phase::AwaitingStartRoll);
        assert!(game.board().is_none());
        assert!(game.history().is_empty());
        assert!(game.render_order().is_empty());
    }

    #[test]
    fn test_invalid_config_refused() {
        let config = GameConfig::new(0).with_step_duration(-1.0);
        assert!(matches!(
            Game::new(config),
            Err(ConfigError::InvalidDuration { field: "step_duration", .. })
        ));
    }

    #[test]
    fn test_out_of_phase_input_not_recorded() {
        let mut game = game(&[3]);
        let err = game.roll_dice().unwrap_err();
        assert!(matches!(err, CommandError::UnexpectedInput { command: "roll_dice", .. }));
        assert!(game.history().is_empty());
        assert_eq!(game.last_rejection(), None);
    }

    #[test]
    fn test_setup_waits_for_delay() {
        let config = GameConfig::instant(0).with_setup_delay(1.0);
        let mut game = Game::with_roller(config, ScriptedRoller::new([5, 2])).unwrap();
        game.start_roll(Color::Red).unwrap();
        game.start_roll(Color::Purple).unwrap();
        assert_eq!(game.phase(), Phase::SettingUpBoard);
        assert_eq!(game.current_color(), Color::Red);

        game.advance(0.5);
        assert_eq!(game.phase(), Phase::SettingUpBoard);
        game.advance(0.5);
        assert_eq!(game.phase(), Phase::AwaitingDiceRoll);
        assert_eq!(game.prompt(), Prompt::RollDice { color: Color::Red, goes_first: true });
    }

    #[test]
    fn test_reject_keeps_selection() {
        // red first; then dice 2,3
        let mut game = game(&[6, 1, 2, 3]);
        game.start_roll(Color::Red).unwrap();
        game.start_roll(Color::Purple).unwrap();
        game.advance(1.0);
        game.roll_dice().unwrap();
        game.stop_dice_animation().unwrap();
        game.select_token(TokenId(0)).unwrap();

        // a purple frog on se
        let purple = game
            .board()
            .unwrap()
            .frogs()
            .iter()
            .find(|f| f.color == Color::Purple)
            .unwrap()
            .id;
        assert_eq!(game.select_frog(purple), Err(CommandError::WrongColor));
        assert_eq!(game.phase(), Phase::AwaitingFrogClick);
        assert_eq!(game.dice().selected(), Some(TokenId(0)));
        assert!(matches!(
            game.prompt(),
            Prompt::ChooseFrog { invalid_target: true, can_reselect: true, .. }
        ));

        assert_eq!(game.select_frog(FrogId(200)), Err(CommandError::UnknownFrog));
        assert_eq!(game.last_rejection(), Some(CommandError::UnknownFrog));
    }

    #[test]
    fn test_covered_frog_rejected() {
        let mut game = game(&[6, 1, 2, 3]);
        game.start_roll(Color::Red).unwrap();
        game.start_roll(Color::Purple).unwrap();
        game.advance(1.0);
        game.roll_dice().unwrap();
        game.stop_dice_animation().unwrap();
        game.select_token(TokenId(0)).unwrap();

        let board = game.board().unwrap();
        let sw = board.topology().by_label("sw").unwrap();
        let bottom = board.stack(sw).occupants()[0].frog;
        assert_eq!(
            game.select_frog(bottom),
            Err(CommandError::Move(MoveRejection::Covered))
        );
    }

    #[test]
    fn test_reset() {
        let mut game = game(&[6, 1]);
        game.start_roll(Color::Red).unwrap();
        game.start_roll(Color::Purple).unwrap();
        game.reset();
        assert_eq!(game.phase(), Phase::AwaitingStartRoll);
        assert!(game.board().is_none());
        assert!(game.history().is_empty());
        assert_eq!(game.start_rolls().ties(), 0);
        assert_eq!(
            game.prompt(),
            Prompt::RollForPosition { color: Color::Red, first_time: true }
        );
    }
}
