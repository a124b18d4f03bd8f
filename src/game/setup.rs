//! Rolling for position and the opening arrangement.
//!
//! ## Start roll
//!
//! Red rolls one die, then Purple. The higher face goes first; a tie wipes
//! both rolls and Red rolls again.
//!
//! ## Arrangement
//!
//! Each color has 12 frogs. With F the starting player and S the other:
//!
//! ```text
//!   sw  6 x F          se  6 x S
//!   5   F S F S        (bottom to top)
//!   10  S F S F
//!   15  F S F S
//! ```
//!
//! The winner of the start roll therefore decides both which root each
//! color uses and which color sits on top of each shared stack.

use serde::{Deserialize, Serialize};

use crate::board::{Board, PathTopology};
use crate::core::{Color, ColorMap, CommandError, SpaceId};

/// Frogs each color starts with.
pub const FROGS_PER_COLOR: usize = 12;

/// Frogs each color starts with on its root.
const FROGS_AT_ROOT: usize = 6;

/// Result of recording one start-roll face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartRollOutcome {
    /// Waiting for this color to roll.
    Waiting(Color),
    /// Both rolled this face; rolling starts over.
    Tie(u8),
    /// `first` rolled higher and starts.
    Decided { first: Color, faces: [u8; 2] },
}

/// Start-roll bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRoll {
    rolls: ColorMap<Option<u8>>,
    ties: u32,
}

impl StartRoll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The color expected to roll next.
    #[must_use]
    pub fn next_roller(&self) -> Color {
        if self.rolls[Color::Red].is_none() {
            Color::Red
        } else {
            Color::Purple
        }
    }

    /// Faces rolled so far in the current round.
    #[must_use]
    pub fn rolls(&self) -> &ColorMap<Option<u8>> {
        &self.rolls
    }

    /// How many tied rounds have been thrown away.
    #[must_use]
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Record `color` rolling `face`.
    pub fn record(&mut self, color: Color, face: u8) -> Result<StartRollOutcome, CommandError> {
        if color != self.next_roller() {
            return Err(CommandError::WrongColor);
        }
        self.rolls[color] = Some(face);

        let (Some(red), Some(purple)) = (self.rolls[Color::Red], self.rolls[Color::Purple]) else {
            return Ok(StartRollOutcome::Waiting(self.next_roller()));
        };

        if red == purple {
            self.rolls = ColorMap::default();
            self.ties += 1;
            return Ok(StartRollOutcome::Tie(red));
        }
        let first = if red > purple { Color::Red } else { Color::Purple };
        Ok(StartRollOutcome::Decided {
            first,
            faces: [red, purple],
        })
    }
}

/// Placement order for the opening position: `(color, space)` per frog.
#[must_use]
pub fn arrangement(first: Color) -> Vec<(Color, SpaceId)> {
    let second = first.opponent();
    let topology = PathTopology::new(first);
    let mut placements = Vec::with_capacity(FROGS_PER_COLOR * 2);

    for _ in 0..FROGS_AT_ROOT {
        placements.push((first, topology.root(first)));
        placements.push((second, topology.root(second)));
    }

    let five = PathTopology::main_track(5);
    let ten = PathTopology::main_track(10);
    let fifteen = PathTopology::main_track(15);
    for (color, space) in [
        (first, five),
        (second, five),
        (first, five),
        (second, five),
        (second, ten),
        (first, ten),
        (second, ten),
        (first, ten),
        (first, fifteen),
        (second, fifteen),
        (first, fifteen),
        (second, fifteen),
    ] {
        placements.push((color, space));
    }

    placements
}

/// Build the opening board for a game `first` starts.
#[must_use]
pub fn set_up_board(first: Color) -> Board {
    let mut board = Board::new(PathTopology::new(first));
    for (color, space) in arrangement(first) {
        board.place(color, space);
    }
    board
}
