//! Turn phases.

use serde::{Deserialize, Serialize};

/// Where the game is in its cycle.
///
/// ```text
/// AwaitingStartRoll -> SettingUpBoard -> AwaitingDiceRoll -> DiceRolling
///     -> AwaitingSelection <-> AwaitingFrogClick -> MoveAnimating
///     -> AwaitingSelection (tokens left) | AwaitingDiceRoll (next player)
/// ```
///
/// There is no terminal phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players roll one die each for position.
    #[default]
    AwaitingStartRoll,
    /// Frogs are placed; waits out the setup delay.
    SettingUpBoard,
    AwaitingDiceRoll,
    DiceRolling,
    /// Dice are stopped; a token must be picked.
    AwaitingSelection,
    /// A token is selected; a frog must be picked.
    AwaitingFrogClick,
    /// An accepted move is playing out. All input is ignored.
    MoveAnimating,
}

impl Phase {
    /// Phases in which `advance` has timed work to do.
    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            Phase::SettingUpBoard | Phase::DiceRolling | Phase::MoveAnimating
        )
    }

    /// Phases in which the current player is choosing a move.
    #[must_use]
    pub fn is_choosing(self) -> bool {
        matches!(self, Phase::AwaitingSelection | Phase::AwaitingFrogClick)
    }
}
