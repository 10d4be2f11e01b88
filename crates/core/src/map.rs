//! Containers keyed by hex coordinate.

use crate::{HexCoordinate, HexLayout, Point};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::debug;
use std::collections::{HashMap, HashSet};

/// A set of hex coordinates
pub type HexCoordinateSet = HashSet<HexCoordinate, FnvBuildHasher>;
/// A map of hex coordinates to some `T`
pub type HexCoordinateMap<T> = HashMap<HexCoordinate, T, FnvBuildHasher>;
/// An ORDERED map of hex coordinates to some `T`. This has some extra memory
/// overhead, so we should only use it when we actually need the ordering.
pub type HexCoordinateIndexMap<T> = IndexMap<HexCoordinate, T, FnvBuildHasher>;

/// A map of tiles keyed by hex coordinate, in a super hexagon pattern (the
/// tiles make up the shape of a larger hexagon). For a map of radius `r`, the
/// furthest tiles are all `r` steps from the origin. Every position within
/// that radius always has a value, and nothing outside of it ever does.
///
/// Iteration order is stable: ascending `q`, then ascending `r`, which is the
/// order of [HexCoordinate::range].
#[derive(Clone, Debug, Default)]
pub struct HexMap<T> {
    /// Distance from the center of the map to the edge. 0 means the map is
    /// exactly 1 tile. 1 means 7 tiles, and so on.
    radius: u16,
    /// Each tile, keyed by its position.
    tiles: HexCoordinateIndexMap<T>,
}

impl<T> HexMap<T> {
    /// Initialize a new map with the given radius.
    ///
    /// ## Arguments
    ///
    /// - `radius`: Distance from the origin to the edge of the map, in all
    ///   directions. 0 means a map of 1 tile, 1 is 7 tiles, 2 => 19, etc.
    /// - `initializer`: Function called to initialize each tile in the map,
    ///   based on its position
    pub fn new(radius: u16, initializer: impl Fn(HexCoordinate) -> T) -> Self {
        let capacity = Self::map_size(radius);
        let mut tiles = HexCoordinateIndexMap::with_capacity_and_hasher(
            capacity,
            FnvBuildHasher::default(),
        );
        for pos in HexCoordinate::ORIGIN.range(radius.into()) {
            tiles.insert(pos, initializer(pos));
        }
        debug_assert_eq!(tiles.len(), capacity, "expected 3r²+3r+1 tiles");
        debug!("Initialized hex map with radius {} ({} tiles)", radius, capacity);

        Self { radius, tiles }
    }

    /// Calculate the size of a map (the number of tiles it contains) based on
    /// its radius. Radius 0 means 1 tile, 1 is 7 tiles, 2 is 19, etc.
    pub fn map_size(radius: u16) -> usize {
        // We'll always have 3r^2+3r+1 tiles (a reduction of a geometric sum).
        // f(0) = 1, and we add 6r tiles for every step after that, so:
        // 1, (+6) 7, (+12) 19, (+18) 37, ...
        let r = radius as usize;
        3 * r * r + 3 * r + 1
    }

    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// Get the number of tiles in the map
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Is the given position within the bounds of this map?
    pub fn contains(&self, pos: HexCoordinate) -> bool {
        self.tiles.contains_key(&pos)
    }

    pub fn get(&self, pos: HexCoordinate) -> Option<&T> {
        self.tiles.get(&pos)
    }

    pub fn get_mut(&mut self, pos: HexCoordinate) -> Option<&mut T> {
        self.tiles.get_mut(&pos)
    }

    /// Get the tile under a point in planar space, if that point falls within
    /// the map. The tile is the one whose center is closest to the point.
    pub fn get_at_point(&self, layout: &HexLayout, point: Point) -> Option<&T> {
        self.get(layout.point_to_hex(point))
    }

    /// Iterate over every position in the map along with its tile
    pub fn iter(&self) -> impl Iterator<Item = (HexCoordinate, &T)> {
        self.tiles.iter().map(|(pos, tile)| (*pos, tile))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.tiles.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.tiles.values_mut()
    }

    /// Map this collection into a new collection by apply the given mapping
    /// function over each tile. The positions (and their order) are
    /// unchanged.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> HexMap<U> {
        let tiles = self
            .tiles
            .into_iter()
            .map(|(pos, tile)| (pos, f(tile)))
            .collect();
        HexMap {
            radius: self.radius,
            tiles,
        }
    }
}
