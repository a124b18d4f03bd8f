//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! Abagio is strictly two-player: every frog, inner track and end stack
//! belongs to either `Red` or `Purple`.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, the two-player counterpart
//! of a per-player map.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Purple,
}

impl Color {
    /// Both colors, in start-roll order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Purple];

    /// The other player's color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Purple,
            Color::Purple => Color::Red,
        }
    }

    /// Slot index (Red = 0, Purple = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Purple => 1,
        }
    }

    /// Lowercase name, as used in labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Purple => "purple",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Purple => write!(f, "Purple"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ```
/// use abagio::core::{Color, ColorMap};
///
/// let mut rolls: ColorMap<Option<u8>> = ColorMap::default();
/// rolls[Color::Purple] = Some(4);
///
/// assert_eq!(rolls[Color::Red], None);
/// assert_eq!(rolls[Color::Purple], Some(4));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Red), factory(Color::Purple)],
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in `Color::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
