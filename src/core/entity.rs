//! Identifiers for frogs, board spaces and dice move tokens.
//!
//! All three are small copyable newtypes over `u8`: the board has 36 spaces,
//! each color owns 12 frogs, and a roll yields at most 4 tokens.
//!
//! ```
//! use abagio::core::{FrogId, SpaceId};
//!
//! let frog = FrogId::new(3);
//! assert_eq!(frog.index(), 3);
//! assert_eq!(format!("{}", SpaceId::new(20)), "Space(20)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of one frog. Allocated in creation order during setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrogId(pub u8);

impl FrogId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position in the board's frog table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FrogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frog({})", self.0)
    }
}

/// Identifier of one board space (index into the topology's space table).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub u8);

impl SpaceId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// Identifier of one usable-move token within the current roll.
///
/// Tokens are numbered from 0 in die order: a plain roll has tokens 0 and 1
/// (first and second die), a double has 0..4 (first die twice, then the
/// second die twice).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}
