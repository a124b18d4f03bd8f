//! Player-facing instructions for the current phase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// What the players should do next.
///
/// The view shows `to_string()`; line wrapping is left to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// `first_time` is set only before anyone has rolled.
    RollForPosition { color: Color, first_time: bool },
    /// Both start rolls showed `face`; Red rolls again.
    StartRollTie { face: u8 },
    SettingUp { first: Color },
    /// `goes_first` is set for the opening roll of the game.
    RollDice { color: Color, goes_first: bool },
    Rolling { color: Color },
    ChooseDie {
        color: Color,
        doubles: bool,
        first_choice: bool,
    },
    ChooseFrog {
        color: Color,
        /// Another die is unused; deselecting the current one frees it.
        can_reselect: bool,
        invalid_target: bool,
    },
    Moving,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Prompt::RollForPosition { color, first_time } => {
                if first_time {
                    write!(f, "Hello, and welcome to Abagio! ")?;
                }
                write!(f, "{color} player, please roll for position.")
            }
            Prompt::StartRollTie { face } => write!(
                f,
                "There was a tie! Both players rolled {face}. Red player, please roll for position."
            ),
            Prompt::SettingUp { first } => write!(f, "{first} player will go first."),
            Prompt::RollDice { color, goes_first } => {
                if goes_first {
                    write!(f, "{color} player will go first. ")?;
                }
                write!(f, "{color} player, please roll.")
            }
            Prompt::Rolling { color } => write!(f, "{color} player, stop the dice when ready."),
            Prompt::ChooseDie {
                color,
                doubles,
                first_choice,
            } => {
                if doubles && first_choice {
                    write!(f, "You rolled doubles! You may use each die twice. ")?;
                }
                let which = if first_choice { "first" } else { "next" };
                write!(
                    f,
                    "{color} player, please click on the die that you would like to use {which}."
                )
            }
            Prompt::ChooseFrog {
                color,
                can_reselect,
                invalid_target,
            } => {
                if invalid_target {
                    write!(f, "Invalid target. Please try again. ")?;
                }
                write!(f, "{color} player, please click on the frog that you would like to move.")?;
                if can_reselect {
                    write!(f, " (Click the selected die again to choose a different one.)")?;
                }
                Ok(())
            }
            Prompt::Moving => write!(f, "Moving..."),
        }
    }
}
