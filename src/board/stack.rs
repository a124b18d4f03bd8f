//! The ordered frog stack on a single space.
//!
//! Index 0 is the bottom of the stack; the last occupant is on top and is
//! the most recent arrival. Landing rules only ever look at the top of the
//! stack:
//! - a full stack refuses every frog
//! - three frogs of one color on top form a **heap**, which refuses the
//!   other color
//! - a lone opposing frog on top (the one beneath it is not the same color)
//!   is captured by the frog landing on it

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, FrogId, MoveRejection};

/// Height of a run that blocks opposing frogs.
pub const HEAP_HEIGHT: usize = 3;

/// One frog in a stack, with its color cached for rule checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub frog: FrogId,
    pub color: Color,
}

/// What happens when a frog lands on a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// The frog goes on top; nothing else moves.
    Stack,
    /// The frog goes on top and this opposing frog is sent home.
    Capture(FrogId),
}

/// Frogs on one space, bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    occupants: SmallVec<[Occupant; 5]>,
    capacity: Option<usize>,
}

impl Stack {
    /// Create an empty stack. `None` means unbounded.
    #[must_use]
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            occupants: SmallVec::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.occupants.len() >= cap)
    }

    /// Occupants bottom to top.
    #[must_use]
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    #[must_use]
    pub fn top(&self) -> Option<Occupant> {
        self.occupants.last().copied()
    }

    /// Color and length of the run of same-colored frogs at the top.
    #[must_use]
    pub fn top_run(&self) -> Option<(Color, usize)> {
        let top = self.top()?;
        let run = self
            .occupants
            .iter()
            .rev()
            .take_while(|o| o.color == top.color)
            .count();
        Some((top.color, run))
    }

    /// Whether a heap of the other color blocks a `color` frog.
    #[must_use]
    pub fn is_heap_against(&self, color: Color) -> bool {
        matches!(self.top_run(), Some((c, run)) if c != color && run >= HEAP_HEIGHT)
    }

    /// Layer of `frog` in this stack (0 = bottom).
    #[must_use]
    pub fn position(&self, frog: FrogId) -> Option<usize> {
        self.occupants.iter().position(|o| o.frog == frog)
    }

    #[must_use]
    pub fn is_on_top(&self, frog: FrogId) -> bool {
        self.top().is_some_and(|o| o.frog == frog)
    }

    /// Decide whether a `color` frog may land here, and what it does.
    ///
    /// Capacity is judged on the stack as it stands, before any capture
    /// would free a slot.
    pub fn landing(&self, color: Color) -> Result<Landing, MoveRejection> {
        if self.is_full() {
            return Err(MoveRejection::Capacity);
        }
        if self.is_heap_against(color) {
            return Err(MoveRejection::Blocked);
        }
        match self.top_run() {
            Some((top_color, 1)) if top_color != color => {
                // run of one: the frog under it (if any) is the other color
                let top = self.occupants[self.occupants.len() - 1];
                Ok(Landing::Capture(top.frog))
            }
            _ => Ok(Landing::Stack),
        }
    }

    /// Put a frog on top, returning its layer.
    ///
    /// Panics if the stack is full: callers check `landing` first.
    pub fn push(&mut self, occupant: Occupant) -> usize {
        assert!(
            !self.is_full(),
            "{} cannot be added: stack is already at capacity {:?}",
            occupant.frog,
            self.capacity
        );
        self.occupants.push(occupant);
        self.occupants.len() - 1
    }

    /// Remove a frog from anywhere in the stack, keeping the order of the
    /// rest. Returns the layer it was on.
    pub fn pull_out(&mut self, frog: FrogId) -> Option<usize> {
        let layer = self.position(frog)?;
        self.occupants.remove(layer);
        Some(layer)
    }
}
