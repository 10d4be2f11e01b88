//! This module holds the basic types of the hexagon coordinate system.
//!
//! ## Cube Coordinates
//!
//! Every tile is addressed by a cube coordinate, as described by
//! [Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! A coordinate has three components (`q`, `r`, and `s`), and **for any tile,
//! all three components are integers and `q + r + s = 0`.** Because of that,
//! `s` can always be derived from the other two, so the pair `(q, r)` (the
//! "axial" coordinate) is used interchangeably with the full triple.
//!
//! Three components make the interesting math simple: distance is the largest
//! component difference, neighbors are one unit step along two axes, and a
//! fractional position can be snapped back to a tile by rounding.
//!
//! **In the vernacular of the page above, we use "flat topped" tiles.** Two
//! sides of each hexagon are horizontal, and its vertices sit at 0°, 60°, …,
//! 300°. All conversion formulas in [crate::layout] assume this orientation.
//!
//! ### Fractional Coordinates
//!
//! Conversions from a planar position and interpolation between tiles produce
//! non-integer coordinates, which may not satisfy the `q + r + s = 0`
//! constraint. Those are represented by [FractionalHex], which has to be
//! rounded back to a [HexCoordinate] before it can address a tile.

mod coordinate;
mod direction;
mod fractional;

pub use self::{coordinate::*, direction::*, fractional::*};
