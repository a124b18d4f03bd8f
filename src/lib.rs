//! # abagio
//!
//! Rule engine for Abagio, a two-player race game in which frogs of two
//! colors run along a shared track, split onto their own inner tracks and
//! merge again before home. Frogs stack, capture lone opposing frogs and
//! form heaps that block the other color.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never draws. A view layer reads snapshots and
//!    translates clicks into `select_token` / `select_frog` commands.
//!
//! 2. **Two-Phase Moves**: A move is validated into a `MovePlan` first and
//!    committed to the board only when its animation has run, so legality
//!    never depends on frame timing.
//!
//! 3. **Deterministic**: All dice come from a `DieRoller`. The default
//!    `GameRng` is seeded from `GameConfig`; tests script exact faces.
//!
//! ## Modules
//!
//! - `core`: Identifiers, colors, RNG, configuration, errors, events
//! - `board`: Path topology, stacks, frogs and movement legality
//! - `dice`: The two dice and the move tokens they grant
//! - `game`: Phases, start roll and setup, animation, prompts, engine

pub mod core;
pub mod board;
pub mod dice;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap,
    FrogId, SpaceId, TokenId,
    DieRoller, GameRng, GameRngState, ScriptedRoller,
    ConfigError, GameConfig,
    CommandError, MoveRejection,
    GameEvent,
};

pub use crate::board::{
    Board, BoardSnapshot, Frog, Landing, Motion, MovePlan, Occupant,
    PathTopology, SpaceInfo, SpaceKind, SpaceSnapshot, Stack,
};

pub use crate::dice::{Dice, Die, MoveToken, TokenState};

pub use crate::game::{
    AnimationStage, AnimationView, Game, GameSnapshot, MoveAnimation,
    Phase, Prompt, StartRoll, StartRollOutcome,
};
