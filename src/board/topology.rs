//! Board spaces and the paths frogs travel.
//!
//! ## Layout
//!
//! ```text
//!   sw / se   roots (first / second player)
//!   1 .. 18   main track, shared
//!   19        diamond into the inner tracks (capacity 2)
//!   20r..25r  red inner track      20p..25p  purple inner track
//!   26        final diamond, shared again (capacity 2)
//!   er / ep   red / purple end stacks
//! ```
//!
//! Every color walks `root -> 1..18 -> 19 -> own inner track -> 26 -> own end
//! stack`: 27 steps from root to end. Successors only depend on color past
//! the diamond at 19; the table itself never changes after construction.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, ColorMap, SpaceId};

/// Number of spaces on the board.
pub const SPACE_COUNT: usize = 36;

/// Number of main-track spaces.
pub const MAIN_TRACK_LEN: u8 = 18;

/// Number of spaces in each inner track.
pub const INNER_TRACK_LEN: u8 = 6;

const WEST_ROOT: SpaceId = SpaceId(0);
const EAST_ROOT: SpaceId = SpaceId(1);
const OUTER_DIAMOND: SpaceId = SpaceId(20);
const FINAL_DIAMOND: SpaceId = SpaceId(33);

/// Kind of a board space. Determines capacity and successors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Root,
    MainTrack,
    /// Connector between the main track and the inner tracks.
    Diamond,
    /// Half of the inner path; only frogs of this color traverse it.
    InnerTrack(Color),
    /// Connector where both inner tracks merge before the end stacks.
    FinalDiamond,
    EndStack,
}

impl SpaceKind {
    /// Maximum stack height, or `None` when unbounded.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            SpaceKind::Root | SpaceKind::EndStack => None,
            SpaceKind::MainTrack | SpaceKind::InnerTrack(_) => Some(5),
            SpaceKind::Diamond | SpaceKind::FinalDiamond => Some(2),
        }
    }
}

/// Static description of one space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceInfo {
    pub id: SpaceId,
    pub kind: SpaceKind,
    /// Board label ("sw", "7", "20r", "26", "ep", ...).
    pub label: String,
    /// Color that owns this space: roots, inner tracks and end stacks.
    pub owner: Option<Color>,
}

/// The fixed board graph.
///
/// Which root belongs to which color depends on who won the start roll: the
/// starting player's frogs live on `sw`, the other player's on `se`.
#[derive(Clone, Debug)]
pub struct PathTopology {
    spaces: Vec<SpaceInfo>,
    roots: ColorMap<SpaceId>,
    labels: FxHashMap<String, SpaceId>,
}

impl PathTopology {
    /// Build the standard board with `first` owning the `sw` root.
    #[must_use]
    pub fn new(first: Color) -> Self {
        let roots = ColorMap::new(|c| if c == first { WEST_ROOT } else { EAST_ROOT });

        let mut spaces = Vec::with_capacity(SPACE_COUNT);
        let mut push = |kind: SpaceKind, label: String, owner: Option<Color>| {
            let id = SpaceId(spaces.len() as u8);
            spaces.push(SpaceInfo { id, kind, label, owner });
        };

        push(SpaceKind::Root, "sw".into(), Some(first));
        push(SpaceKind::Root, "se".into(), Some(first.opponent()));
        for n in 1..=MAIN_TRACK_LEN {
            push(SpaceKind::MainTrack, n.to_string(), None);
        }
        push(SpaceKind::Diamond, "19".into(), None);
        for color in Color::ALL {
            let suffix = &color.name()[..1];
            for k in 0..INNER_TRACK_LEN {
                push(SpaceKind::InnerTrack(color), format!("{}{}", 20 + k, suffix), Some(color));
            }
        }
        push(SpaceKind::FinalDiamond, "26".into(), None);
        push(SpaceKind::EndStack, "er".into(), Some(Color::Red));
        push(SpaceKind::EndStack, "ep".into(), Some(Color::Purple));

        debug_assert_eq!(spaces.len(), SPACE_COUNT);
        debug_assert_eq!(spaces[OUTER_DIAMOND.index()].kind, SpaceKind::Diamond);
        debug_assert_eq!(spaces[FINAL_DIAMOND.index()].kind, SpaceKind::FinalDiamond);

        let labels = spaces.iter().map(|s| (s.label.clone(), s.id)).collect();

        Self { spaces, roots, labels }
    }

    /// The `n`th main-track space (1-based, `1..=18`).
    #[must_use]
    pub const fn main_track(n: u8) -> SpaceId {
        assert!(n >= 1 && n <= MAIN_TRACK_LEN, "Main track spaces are 1..=18");
        SpaceId(1 + n)
    }

    /// The diamond at 19 joining the main track to the inner tracks.
    #[must_use]
    pub const fn outer_diamond() -> SpaceId {
        OUTER_DIAMOND
    }

    /// The `k`th space (0-based, `0..6`) of `color`'s inner track.
    #[must_use]
    pub const fn inner_track(color: Color, k: u8) -> SpaceId {
        assert!(k < INNER_TRACK_LEN, "Inner track spaces are 0..6");
        SpaceId(21 + color.index() as u8 * INNER_TRACK_LEN + k)
    }

    /// The shared diamond at 26.
    #[must_use]
    pub const fn final_diamond() -> SpaceId {
        FINAL_DIAMOND
    }

    /// `color`'s end stack.
    #[must_use]
    pub const fn end_stack(color: Color) -> SpaceId {
        SpaceId(34 + color.index() as u8)
    }

    /// `color`'s root.
    #[must_use]
    pub fn root(&self, color: Color) -> SpaceId {
        self.roots[color]
    }

    /// All spaces, indexed by `SpaceId`.
    #[must_use]
    pub fn spaces(&self) -> &[SpaceInfo] {
        &self.spaces
    }

    /// Static info for one space.
    ///
    /// Panics if `id` is not on this board.
    #[must_use]
    pub fn space(&self, id: SpaceId) -> &SpaceInfo {
        &self.spaces[id.index()]
    }

    /// Look a space up by its board label.
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<SpaceId> {
        self.labels.get(label).copied()
    }

    #[must_use]
    pub fn capacity(&self, id: SpaceId) -> Option<usize> {
        self.space(id).kind.capacity()
    }

    /// The next space for a `color` frog leaving `space`.
    ///
    /// Returns `None` past an end stack, or on the other color's inner track.
    #[must_use]
    pub fn successor(&self, space: SpaceId, color: Color) -> Option<SpaceId> {
        match self.space(space).kind {
            SpaceKind::Root => Some(Self::main_track(1)),
            SpaceKind::MainTrack => {
                let n = space.0 - 1;
                if n < MAIN_TRACK_LEN {
                    Some(Self::main_track(n + 1))
                } else {
                    Some(OUTER_DIAMOND)
                }
            }
            SpaceKind::Diamond => Some(Self::inner_track(color, 0)),
            SpaceKind::InnerTrack(owner) if owner == color => {
                let k = space.0 - Self::inner_track(owner, 0).0;
                if k + 1 < INNER_TRACK_LEN {
                    Some(Self::inner_track(owner, k + 1))
                } else {
                    Some(FINAL_DIAMOND)
                }
            }
            SpaceKind::InnerTrack(_) => None,
            SpaceKind::FinalDiamond => Some(Self::end_stack(color)),
            SpaceKind::EndStack => None,
        }
    }

    /// Every space entered when a `color` frog walks `steps` forward from
    /// `space`, destination last.
    ///
    /// Returns `None` if the walk runs off the path or `steps` is zero.
    #[must_use]
    pub fn walk(&self, space: SpaceId, color: Color, steps: u8) -> Option<SmallVec<[SpaceId; 6]>> {
        if steps == 0 {
            return None;
        }
        let mut visited = SmallVec::new();
        let mut at = space;
        for _ in 0..steps {
            at = self.successor(at, color)?;
            visited.push(at);
        }
        Some(visited)
    }

    /// The space a `color` frog reaches after `steps` from `space`.
    #[must_use]
    pub fn destination(&self, space: SpaceId, color: Color, steps: u8) -> Option<SpaceId> {
        self.walk(space, color, steps)?.last().copied()
    }

    /// `color`'s whole path, root first, end stack last.
    #[must_use]
    pub fn path(&self, color: Color) -> Vec<SpaceId> {
        std::iter::successors(Some(self.root(color)), |&s| self.successor(s, color)).collect()
    }
}
