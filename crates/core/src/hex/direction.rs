use crate::hex::HexCoordinate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The 6 directions in which hexes can line up side-to-side. For any given
/// tile, a direction represents both the way from its center to the midpoint
/// of one of its sides, and the way to the neighboring tile across that side.
///
/// The compass names assume a screen-like space where `+y` points down (see
/// [crate::Point]). **The order of the variants is significant**: it is the
/// order of [Self::ALL] and of [HexCoordinate::neighbors], so callers can
/// index directions by number (`0` is [Self::SouthEast]).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexDirection {
    /// `(+1, 0, -1)`
    SouthEast,
    /// `(+1, -1, 0)`
    NorthEast,
    /// `(0, -1, +1)`
    North,
    /// `(-1, 0, +1)`
    NorthWest,
    /// `(-1, +1, 0)`
    SouthWest,
    /// `(0, +1, -1)`
    South,
}

impl HexDirection {
    /// Every direction, in index order. Visually this walks counter-clockwise
    /// around a tile, starting at the lower-right side.
    pub const ALL: [Self; 6] = [
        Self::SouthEast,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::SouthWest,
        Self::South,
    ];

    /// Position of this direction within [Self::ALL]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction at the given index. Indexes wrap around, so `6` is
    /// the same as `0`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Get an offset that moves a coordinate one tile in this direction
    pub fn vector(self) -> HexCoordinate {
        match self {
            Self::SouthEast => HexCoordinate::new(1, 0),
            Self::NorthEast => HexCoordinate::new(1, -1),
            Self::North => HexCoordinate::new(0, -1),
            Self::NorthWest => HexCoordinate::new(-1, 0),
            Self::SouthWest => HexCoordinate::new(-1, 1),
            Self::South => HexCoordinate::new(0, 1),
        }
    }

    /// Get the direction that points directly away from this one
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The next direction in index order (one side counter-clockwise)
    pub fn rotate_counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The previous direction in index order (one side clockwise)
    pub fn rotate_clockwise(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}
