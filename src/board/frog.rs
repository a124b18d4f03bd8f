//! A single frog.

use serde::{Deserialize, Serialize};

use crate::core::{Color, FrogId, SpaceId};

/// Animation state of a frog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    Idle,
    /// Walking toward its destination; `remaining` spaces still to enter.
    SteppingForward { remaining: u8 },
    /// Captured and sliding back to its root.
    SlidingHome,
}

/// One game piece.
///
/// `space` and `layer` always describe the stack the frog is recorded in.
/// A frog stepping forward stays recorded on its origin until it lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frog {
    pub id: FrogId,
    pub color: Color,
    pub space: SpaceId,
    /// Position within the space's stack (0 = bottom).
    pub layer: usize,
    pub motion: Motion,
}

impl Frog {
    #[must_use]
    pub fn new(id: FrogId, color: Color, space: SpaceId, layer: usize) -> Self {
        Self {
            id,
            color,
            space,
            layer,
            motion: Motion::Idle,
        }
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.motion != Motion::Idle
    }
}
