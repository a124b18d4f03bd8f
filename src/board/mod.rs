//! Board model: topology, stacks, frogs and movement legality.
//!
//! ## Key Types
//!
//! - `PathTopology`: fixed space table and per-color successor rules
//! - `Stack`: ordered frogs on one space with capacity and heap rules
//! - `Frog`: one piece and its animation state
//! - `Board`: all stacks and frogs; validates, commits and snapshots moves

pub mod topology;
pub mod stack;
pub mod frog;
pub mod state;

pub use topology::{PathTopology, SpaceInfo, SpaceKind, SPACE_COUNT};
pub use stack::{Landing, Occupant, Stack, HEAP_HEIGHT};
pub use frog::{Frog, Motion};
pub use state::{Board, BoardSnapshot, MovePlan, SpaceSnapshot};
