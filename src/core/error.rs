//! Rule rejections and command errors.
//!
//! None of these are fatal: the state machine stays where it was and the
//! error is kept as the last rejection so the view can explain it.

use serde::{Deserialize, Serialize};

use crate::game::Phase;

/// Why a frog cannot make a particular move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum MoveRejection {
    /// Destination lies beyond the end stack or off this color's path.
    #[error("that move would leave the frog's path")]
    OffPath,

    /// Destination stack is already full.
    #[error("the destination space is full")]
    Capacity,

    /// Destination is topped by a heap of three opposing frogs.
    #[error("the destination is blocked by an opposing heap")]
    Blocked,

    /// The frog has another frog on top of it.
    #[error("only the top frog of a stack can move")]
    Covered,
}

/// Errors returned by the engine's command surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum CommandError {
    #[error("invalid move: {0}")]
    Move(#[from] MoveRejection),

    /// Token already expended, unknown, or another token is selected.
    #[error("that die cannot be selected right now")]
    InvalidSelection,

    /// Acting for the player who is not on turn.
    #[error("it is not that color's turn")]
    WrongColor,

    #[error("no such frog")]
    UnknownFrog,

    /// Input that has no meaning in the current phase; ignored.
    #[error("{command} is not accepted while {phase:?}")]
    UnexpectedInput { command: &'static str, phase: Phase },
}

impl CommandError {
    /// Whether this error explains a player mistake worth showing.
    ///
    /// Unexpected input (clicks during animations and the like) is dropped
    /// silently instead.
    #[must_use]
    pub fn is_player_facing(&self) -> bool {
        !matches!(self, CommandError::UnexpectedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_rejection_converts() {
        let err: CommandError = MoveRejection::Blocked.into();
        assert_eq!(err, CommandError::Move(MoveRejection::Blocked));
        assert_eq!(
            err.to_string(),
            "invalid move: the destination is blocked by an opposing heap"
        );
    }

    #[test]
    fn test_player_facing() {
        assert!(CommandError::WrongColor.is_player_facing());
        assert!(CommandError::Move(MoveRejection::Capacity).is_player_facing());
        let ignored = CommandError::UnexpectedInput {
            command: "roll_dice",
            phase: Phase::MoveAnimating,
        };
        assert!(!ignored.is_player_facing());
        assert_eq!(ignored.to_string(), "roll_dice is not accepted while MoveAnimating");
    }
}
