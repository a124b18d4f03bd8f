//! Core engine types: identifiers, colors, RNG, configuration, errors, events.
//!
//! This module contains the building blocks shared by the board, the dice
//! and the turn state machine. Only command errors refer to turn phases, so
//! a refusal can name the phase that caused it.

pub mod color;
pub mod entity;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;

pub use color::{Color, ColorMap};
pub use entity::{FrogId, SpaceId, TokenId};
pub use rng::{DieRoller, GameRng, GameRngState, ScriptedRoller};
pub use config::{ConfigError, GameConfig};
pub use error::{CommandError, MoveRejection};
pub use event::GameEvent;
