use crate::hex::{FractionalHex, HexDirection};
use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{
    cmp,
    convert::{TryFrom, TryInto},
};

/// The position of a single tile in the hex coordinate system. See the
/// module-level documentation for a description of cube coordinates.
///
/// Since `q + r + s = 0` for all tiles, this only stores `q` and `r`, and `s`
/// is derived whenever it's needed. That means the constraint holds by
/// construction: there is no way to build a `HexCoordinate` that violates it.
///
/// Coordinates serialize as a full `{q, r, s}` object, for the benefit of
/// consumers that don't want to derive `s` themselves. Deserializing a triple
/// that doesn't sum to zero fails.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Neg,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
#[serde(into = "CubeCoordinate", try_from = "CubeCoordinate")]
pub struct HexCoordinate {
    q: i32,
    r: i32,
}

impl HexCoordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Largest magnitude allowed for `q` or `r` by [Self::try_new]. Keeping
    /// both under half of `i32::MAX` means `s`, and the distance between any
    /// two such tiles, always fit in their types.
    pub const MAX_COMPONENT: i32 = i32::MAX / 2;

    /// Construct a new coordinate from its `q` and `r` components. Since
    /// `q + r + s = 0` for all tiles, `s` is derived from those.
    ///
    /// No range checking is done here, so `-q - r` has to fit in an `i32`.
    /// Use [Self::try_new] for values that come from outside the program.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a new coordinate, returning an error if either component is
    /// beyond [Self::MAX_COMPONENT]
    pub fn try_new(q: i32, r: i32) -> anyhow::Result<Self> {
        let limit = Self::MAX_COMPONENT.unsigned_abs();
        if q.unsigned_abs() > limit || r.unsigned_abs() > limit {
            Err(anyhow!(
                "Coordinate ({}, {}) is out of range; q and r must be \
                within ±{}",
                q,
                r,
                limit
            ))
        } else {
            Ok(Self::new(q, r))
        }
    }

    /// Construct a new coordinate from all three cube components. Returns an
    /// error if they don't fall on the plane `q + r + s = 0`.
    pub fn from_cube(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        // Widen so the sum itself can't overflow
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(anyhow!(
                "Invalid cube coordinate ({}, {}, {}); q + r + s must equal 0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new(q, r))
        }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Get the tile adjacent to this one in the given direction
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.vector()
    }

    /// Get all 6 tiles adjacent to this one. The order matches
    /// [HexDirection::ALL], so `neighbors()[i]` is the neighbor in direction
    /// `i`.
    pub fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|dir| self.neighbor(dir))
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// single steps it takes to get from one to the other. 0 if the tiles are
    /// equal, 1 if they are adjacent, 2 if there is 1 tile between them, etc.
    ///
    /// The math is done in `i64`, so this is exact for any two tiles within
    /// [Self::MAX_COMPONENT]. Beyond that it saturates at `u32::MAX`.
    pub fn distance_to(self, other: Self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = -dq - dr;
        let distance = cmp::max(
            dq.unsigned_abs(),
            cmp::max(dr.unsigned_abs(), ds.unsigned_abs()),
        );
        distance.try_into().unwrap_or(u32::MAX)
    }

    /// Distance from the origin
    pub fn length(self) -> u32 {
        self.distance_to(Self::ORIGIN)
    }

    /// Get every tile that is exactly `radius` steps from this one. There are
    /// `6 * radius` of them (or just this tile, for a radius of 0). The ring
    /// starts at the tile `radius` steps to the south-west and walks around in
    /// direction order.
    pub fn ring(self, radius: u32) -> Vec<Self> {
        if radius == 0 {
            return vec![self];
        }

        let mut ring = Vec::with_capacity(6 * radius as usize);
        // https://www.redblobgames.com/grids/hexagons/#rings
        let mut pos = self + HexDirection::SouthWest.vector() * radius as i32;
        for direction in HexDirection::ALL.iter() {
            for _ in 0..radius {
                ring.push(pos);
                pos = pos.neighbor(*direction);
            }
        }
        ring
    }

    /// Get an iterator of every tile within `radius` steps of this one,
    /// including this one. The tiles make up the shape of a larger hexagon,
    /// and there are `3r²+3r+1` of them. Tiles are produced in order of
    /// ascending `q`, then ascending `r`.
    pub fn range(self, radius: u32) -> impl Iterator<Item = Self> {
        let n = radius as i32;
        (-n..=n).flat_map(move |dq| {
            // If we just do [-n,n] for r as well, then we end up with a
            // diamond pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let r_min = cmp::max(-n, -dq - n);
            let r_max = cmp::min(n, -dq + n);
            (r_min..=r_max).map(move |dr| self + Self::new(dq, dr))
        })
    }

    /// Get the tiles that fall on a straight line from this tile to another,
    /// inclusive on both ends. The result always has `distance + 1` tiles, and
    /// each one is adjacent to the previous.
    pub fn line_to(self, other: Self) -> Vec<Self> {
        // https://www.redblobgames.com/grids/hexagons/#line-drawing
        let distance = self.distance_to(other);
        if distance == 0 {
            return vec![self];
        }

        // Nudge both endpoints off of the tile edges, so that points that land
        // exactly between two tiles always round the same way
        let nudge = FractionalHex::from_cube(1e-6, 2e-6, -3e-6);
        let start = FractionalHex::from(self) + nudge;
        let end = FractionalHex::from(other) + nudge;
        (0..=distance)
            .map(|i| start.lerp(end, i as f64 / distance as f64).round())
            .collect()
    }
}

impl From<HexDirection> for HexCoordinate {
    fn from(direction: HexDirection) -> Self {
        direction.vector()
    }
}

/// Serialized form of [HexCoordinate]. This exists so that all three
/// components end up in the output, and so the `q + r + s = 0` constraint gets
/// checked on the way back in.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct CubeCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

impl From<HexCoordinate> for CubeCoordinate {
    fn from(hex: HexCoordinate) -> Self {
        Self {
            q: hex.q(),
            r: hex.r(),
            s: hex.s(),
        }
    }
}

impl TryFrom<CubeCoordinate> for HexCoordinate {
    type Error = anyhow::Error;

    fn try_from(value: CubeCoordinate) -> Result<Self, Self::Error> {
        Self::from_cube(value.q, value.r, value.s)
    }
}
