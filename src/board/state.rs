//! The board: every space's stack, every frog, and the movement rules.
//!
//! Moves follow a two-phase protocol:
//! 1. `attempt_move` validates against the current board and returns a
//!    `MovePlan` (or a `MoveRejection`) without touching anything.
//! 2. `commit` applies an accepted plan atomically: the frog leaves its
//!    origin, any captured frog goes back to its root, and the frog lands.
//!
//! Only the final destination is checked. Spaces passed through on the way
//! are never subject to capacity, heap or capture rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::frog::{Frog, Motion};
use super::stack::{Landing, Occupant, Stack};
use super::topology::{PathTopology, SpaceKind};
use crate::core::{Color, FrogId, MoveRejection, SpaceId};

/// An accepted move, ready to animate and commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    pub frog: FrogId,
    pub color: Color,
    pub origin: SpaceId,
    pub destination: SpaceId,
    /// Spaces entered in order, destination last.
    pub path: SmallVec<[SpaceId; 6]>,
    pub landing: Landing,
}

impl MovePlan {
    /// Number of spaces walked.
    #[must_use]
    pub fn steps(&self) -> u8 {
        self.path.len() as u8
    }

    /// The frog this move will send home, if any.
    #[must_use]
    pub fn captures(&self) -> Option<FrogId> {
        match self.landing {
            Landing::Capture(frog) => Some(frog),
            Landing::Stack => None,
        }
    }
}

/// Board contents for one space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceSnapshot {
    pub id: SpaceId,
    pub label: String,
    pub kind: SpaceKind,
    /// Bottom to top.
    pub frogs: Vec<Occupant>,
}

/// Full board contents, space by space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub spaces: Vec<SpaceSnapshot>,
}

impl BoardSnapshot {
    /// Contents of the space with this label.
    #[must_use]
    pub fn space(&self, label: &str) -> Option<&SpaceSnapshot> {
        self.spaces.iter().find(|s| s.label == label)
    }
}

/// Single source of truth for frog placement.
#[derive(Clone, Debug)]
pub struct Board {
    topology: PathTopology,
    stacks: Vec<Stack>,
    frogs: Vec<Frog>,
}

impl Board {
    /// Create an empty board over `topology`.
    #[must_use]
    pub fn new(topology: PathTopology) -> Self {
        let stacks = topology
            .spaces()
            .iter()
            .map(|s| Stack::new(s.kind.capacity()))
            .collect();
        Self {
            topology,
            stacks,
            frogs: Vec::new(),
        }
    }

    #[must_use]
    pub fn topology(&self) -> &PathTopology {
        &self.topology
    }

    /// Create a frog on top of `space`.
    ///
    /// Panics if the space is full; setup never overfills a space.
    pub fn place(&mut self, color: Color, space: SpaceId) -> FrogId {
        let id = FrogId(self.frogs.len() as u8);
        let layer = self.stacks[space.index()].push(Occupant { frog: id, color });
        self.frogs.push(Frog::new(id, color, space, layer));
        id
    }

    /// All frogs, indexed by `FrogId`.
    #[must_use]
    pub fn frogs(&self) -> &[Frog] {
        &self.frogs
    }

    #[must_use]
    pub fn frog(&self, id: FrogId) -> Option<&Frog> {
        self.frogs.get(id.index())
    }

    /// The stack on `space`.
    ///
    /// Panics if `space` is not on this board.
    #[must_use]
    pub fn stack(&self, space: SpaceId) -> &Stack {
        &self.stacks[space.index()]
    }

    /// The stack on the space with this label.
    #[must_use]
    pub fn stack_at(&self, label: &str) -> Option<&Stack> {
        self.topology.by_label(label).map(|s| self.stack(s))
    }

    /// Number of `color` frogs across all spaces.
    #[must_use]
    pub fn frog_count(&self, color: Color) -> usize {
        self.stacks
            .iter()
            .flat_map(|s| s.occupants())
            .filter(|o| o.color == color)
            .count()
    }

    /// Validate moving `frog` forward `steps` spaces.
    ///
    /// Panics if `frog` does not exist.
    pub fn attempt_move(&self, frog: FrogId, steps: u8) -> Result<MovePlan, MoveRejection> {
        let piece = &self.frogs[frog.index()];
        if !self.stack(piece.space).is_on_top(frog) {
            return Err(MoveRejection::Covered);
        }
        let path = self
            .topology
            .walk(piece.space, piece.color, steps)
            .ok_or(MoveRejection::OffPath)?;
        let destination = *path.last().ok_or(MoveRejection::OffPath)?;
        let landing = self.stack(destination).landing(piece.color)?;

        Ok(MovePlan {
            frog,
            color: piece.color,
            origin: piece.space,
            destination,
            path,
            landing,
        })
    }

    /// Every accepted move for `color` with a token worth `steps`.
    ///
    /// Frogs already moving are skipped.
    #[must_use]
    pub fn legal_moves(&self, color: Color, steps: u8) -> Vec<MovePlan> {
        self.frogs
            .iter()
            .filter(|f| f.color == color && !f.is_moving())
            .filter_map(|f| self.attempt_move(f.id, steps).ok())
            .collect()
    }

    /// Apply an accepted plan. Returns the captured frog, if any.
    ///
    /// Panics if the board changed since the plan was made so that it is no
    /// longer the plan `attempt_move` would produce.
    pub fn commit(&mut self, plan: &MovePlan) -> Option<FrogId> {
        let recheck = self.attempt_move(plan.frog, plan.steps());
        assert_eq!(recheck.as_ref(), Ok(plan), "stale move plan for {}", plan.frog);

        self.stacks[plan.origin.index()].pull_out(plan.frog);
        self.reindex(plan.origin);

        let captured = plan.captures();
        if let Some(victim) = captured {
            let color = self.frogs[victim.index()].color;
            let root = self.topology.root(color);
            self.stacks[plan.destination.index()].pull_out(victim);
            self.stacks[root.index()].push(Occupant { frog: victim, color });
            let frog = &mut self.frogs[victim.index()];
            frog.space = root;
            frog.motion = Motion::SlidingHome;
            self.reindex(root);
            info!(frog = %victim, by = %plan.frog, space = %plan.destination, "frog sent home");
        }

        let layer = self.stacks[plan.destination.index()].push(Occupant {
            frog: plan.frog,
            color: plan.color,
        });
        let frog = &mut self.frogs[plan.frog.index()];
        frog.space = plan.destination;
        frog.layer = layer;
        self.reindex(plan.destination);

        debug!(frog = %plan.frog, from = %plan.origin, to = %plan.destination, "move committed");
        debug_assert!(self.is_consistent());
        captured
    }

    /// Set a frog's animation state.
    pub fn set_motion(&mut self, frog: FrogId, motion: Motion) {
        self.frogs[frog.index()].motion = motion;
    }

    fn reindex(&mut self, space: SpaceId) {
        for (layer, occupant) in self.stacks[space.index()].occupants().iter().enumerate() {
            self.frogs[occupant.frog.index()].layer = layer;
        }
    }

    /// Check that every stack is within capacity and that frogs and stacks
    /// agree on where each frog is.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let stacks_ok = self
            .stacks
            .iter()
            .all(|s| s.capacity().map_or(true, |cap| s.len() <= cap));
        let frogs_ok = self.frogs.iter().all(|f| {
            let stack = &self.stacks[f.space.index()];
            stack.position(f.id) == Some(f.layer) && stack.occupants()[f.layer].color == f.color
        });
        let total: usize = self.stacks.iter().map(Stack::len).sum();
        stacks_ok && frogs_ok && total == self.frogs.len()
    }

    /// Copy out the board contents.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let spaces = self
            .topology
            .spaces()
            .iter()
            .map(|info| SpaceSnapshot {
                id: info.id,
                label: info.label.clone(),
                kind: info.kind,
                frogs: self.stack(info.id).occupants().to_vec(),
            })
            .collect();
        BoardSnapshot { spaces }
    }
}
