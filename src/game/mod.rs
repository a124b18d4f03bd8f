//! Turn state machine and the game engine.
//!
//! ## Key Types
//!
//! - `Phase`: where the game is in its cycle
//! - `StartRoll`: rolling for position, and the opening arrangement
//! - `MoveAnimation`: frame-paced playback of an accepted move
//! - `Prompt`: player-facing instructions
//! - `Game`: owns everything; commands in, queries out

pub mod phase;
pub mod setup;
pub mod animation;
pub mod prompt;
pub mod engine;

pub use phase::Phase;
pub use setup::{arrangement, set_up_board, StartRoll, StartRollOutcome, FROGS_PER_COLOR};
pub use animation::{AnimationStage, AnimationView, MoveAnimation};
pub use prompt::Prompt;
pub use engine::{Game, GameSnapshot};
