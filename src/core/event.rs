//! Game history events.
//!
//! Every accepted command and every engine-driven transition appends one
//! event to the game's history. The history is an `im::Vector`, so hosts
//! can snapshot it cheaply for replays or logs.

use serde::Serialize;

use super::color::Color;
use super::entity::{FrogId, SpaceId, TokenId};
use super::error::CommandError;

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// One player rolled for position.
    StartRoll { color: Color, face: u8 },
    /// Both players rolled the same face; both roll again.
    StartRollTie { face: u8 },
    /// Frogs placed with `first` as the starting player.
    BoardSetUp { first: Color },
    /// `color` may now roll.
    TurnStarted { color: Color },
    /// The dice stopped on these faces.
    DiceRolled { color: Color, faces: [u8; 2] },
    TokenSelected { token: TokenId, value: u8 },
    TokenDeselected { token: TokenId },
    /// A move was accepted and its animation started.
    MoveStarted {
        frog: FrogId,
        from: SpaceId,
        to: SpaceId,
        steps: u8,
    },
    /// The moving frog landed and the board was updated.
    FrogLanded { frog: FrogId, space: SpaceId },
    /// `frog` was sent back to its root by `by`.
    FrogCaptured {
        frog: FrogId,
        by: FrogId,
        space: SpaceId,
    },
    /// The move animation finished and its token was expended.
    MoveFinished { frog: FrogId, token: TokenId },
    /// A command was refused.
    Rejected { error: CommandError },
}
