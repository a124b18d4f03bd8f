//! Deterministic die rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequences
//! - **Serializable**: O(1) state capture and restore
//! - **Pluggable**: the engine only needs a `DieRoller`, so tests and replays
//!   can feed exact faces through `ScriptedRoller`
//!
//! ```
//! use abagio::core::{DieRoller, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of six-sided die faces.
pub trait DieRoller {
    /// Roll one die, returning a face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Roll a face guaranteed to differ from `current`.
    ///
    /// Used while dice are shaking so the shown face visibly changes.
    fn roll_other(&mut self, current: u8) -> u8 {
        let face = self.roll_die();
        if face == current {
            face % 6 + 1
        } else {
            face
        }
    }
}

/// Seeded RNG for die rolls.
///
/// Uses ChaCha8 for speed while keeping a good distribution.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieRoller for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Roller that replays a fixed script of faces, cycling when exhausted.
///
/// ```
/// use abagio::core::{DieRoller, ScriptedRoller};
///
/// let mut dice = ScriptedRoller::new([4, 4, 6]);
/// assert_eq!(dice.roll_die(), 4);
/// assert_eq!(dice.roll_die(), 4);
/// assert_eq!(dice.roll_die(), 6);
/// assert_eq!(dice.roll_die(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRoller {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedRoller {
    /// Create a roller from a non-empty script of faces in `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "Script must contain at least one face");
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "Die faces must be in 1..=6: {:?}",
            faces
        );
        Self { faces, cursor: 0 }
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DieRoller for ScriptedRoller {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
