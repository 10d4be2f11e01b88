//! Conversion between the hex coordinate system and planar (2D) space.
//!
//! Planar space is a conventional Cartesian plane where the tile `(0, 0, 0)`
//! is centered on the origin, `+x` is right and `+y` is **down**, matching
//! canvas/screen conventions. Its unit is whatever the caller wants it to be
//! (e.g. meters on a real map); the only link between the two spaces is the
//! hex size, the distance from the center of a tile to any of its vertices.
//!
//! Tiles are flat topped, so with a hex size of `1`:
//!
//! ```text
//!    ___
//!   /   \___      width = 2, height = sqrt(3)
//!   \___/   \     centers of (0, 0) and (1, 0) are 1.5 apart in x
//!       \___/
//! ```

use crate::hex::{FractionalHex, HexCoordinate};
use anyhow::ensure;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in planar space. See module-level docs for a description of the
/// coordinate space. The same type is used for screen positions (in pixels)
/// by [crate::Viewport].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between two points
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Matrix that maps `(q, r)` to a point, for a hex size of 1
fn forward_matrix() -> Matrix2<f64> {
    Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3)
}

/// Exact inverse of [forward_matrix]
fn inverse_matrix() -> Matrix2<f64> {
    Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
}

/// Get the center of a tile in planar space.
///
/// `size` must be positive. That isn't checked here; use [HexLayout] to get a
/// validated size.
pub fn hex_to_point(hex: HexCoordinate, size: f64) -> Point {
    let v = forward_matrix() * Vector2::new(hex.q() as f64, hex.r() as f64);
    Point::new(v.x * size, v.y * size)
}

/// Get the exact (unrounded) hex position of a point in planar space.
///
/// `size` must be positive. That isn't checked here; use [HexLayout] to get a
/// validated size.
pub fn point_to_fractional_hex(point: Point, size: f64) -> FractionalHex {
    let v = inverse_matrix() * Vector2::new(point.x, point.y);
    FractionalHex::new(v.x / size, v.y / size)
}

/// Get the tile whose center is closest to a point in planar space. This is
/// the inverse of [hex_to_point].
///
/// `size` must be positive. That isn't checked here; use [HexLayout] to get a
/// validated size.
pub fn point_to_hex(point: Point, size: f64) -> HexCoordinate {
    point_to_fractional_hex(point, size).round()
}

/// Get the 6 vertices of a flat-topped hexagon centered on a point. Vertices
/// are at `0°, 60°, …, 300°` from the center, in that order, each `size` away
/// from it. With `+y` pointing down, that goes clockwise on screen starting at
/// the right-most vertex.
pub fn vertices(center: Point, size: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64).to_radians();
        center + Point::new(size * angle.cos(), size * angle.sin())
    })
}

/// A hex size, validated to be positive, along with conversions that use it.
/// Any code that converts between hex and planar space should share a single
/// layout, so that every conversion uses the same size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    size: f64,
}

impl HexLayout {
    /// Create a new layout. `size` is the distance from the center of a tile to
    /// each of its vertices (which is also the length of each side). Returns an
    /// error if it's not a positive, finite number.
    pub fn new(size: f64) -> anyhow::Result<Self> {
        ensure!(
            size.is_finite() && size > 0.0,
            "Hex size must be a positive number, but was {}",
            size
        );
        Ok(Self { size })
    }

    /// Distance from the center of a tile to each of its vertices
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Distance between the two opposite vertices of a tile (left to right)
    pub fn width(&self) -> f64 {
        self.size * 2.0
    }

    /// Distance between the top and bottom sides of a tile
    pub fn height(&self) -> f64 {
        self.size * SQRT_3
    }

    /// Distance **in the x axis only** between the centers of two tiles whose
    /// `q` differs by one
    pub fn horizontal_spacing(&self) -> f64 {
        self.size * 1.5
    }

    /// Distance between the centers of two tiles that are stacked vertically
    pub fn vertical_spacing(&self) -> f64 {
        self.height()
    }

    /// See [hex_to_point]
    pub fn hex_to_point(&self, hex: HexCoordinate) -> Point {
        hex_to_point(hex, self.size)
    }

    /// See [point_to_fractional_hex]
    pub fn point_to_fractional_hex(&self, point: Point) -> FractionalHex {
        point_to_fractional_hex(point, self.size)
    }

    /// See [point_to_hex]
    pub fn point_to_hex(&self, point: Point) -> HexCoordinate {
        point_to_hex(point, self.size)
    }

    /// Get the 6 vertices of a tile in planar space. See [vertices] for the
    /// order.
    pub fn hex_vertices(&self, hex: HexCoordinate) -> [Point; 6] {
        vertices(self.hex_to_point(hex), self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_hex_to_point() {
        let point = hex_to_point(HexCoordinate::new(1, 0), 2000.0);
        assert_approx_eq!(point.x, 3000.0);
        assert_approx_eq!(point.y, 1732.050_807_568_877, 1e-6);

        assert_eq!(hex_to_point(HexCoordinate::ORIGIN, 10.0), Point::ORIGIN);

        let point = hex_to_point(HexCoordinate::new(0, 1), 1.0);
        assert_approx_eq!(point.x, 0.0);
        assert_approx_eq!(point.y, SQRT_3);
    }

    #[test]
    fn test_round_trip() {
        for &size in &[0.5, 1.0, 37.0, 2000.0] {
            for hex in HexCoordinate::ORIGIN.range(12) {
                assert_eq!(
                    point_to_hex(hex_to_point(hex, size), size),
                    hex,
                    "size {}",
                    size
                );
            }
        }

        let far = HexCoordinate::new(-30_000, 12_345);
        assert_eq!(point_to_hex(hex_to_point(far, 3.0), 3.0), far);
    }

    #[test]
    fn test_fractional_round_trip_is_exact() {
        let hex = HexCoordinate::new(7, -3);
        let fractional =
            point_to_fractional_hex(hex_to_point(hex, 25.0), 25.0);
        assert_approx_eq!(fractional.q, 7.0, 1e-9);
        assert_approx_eq!(fractional.r, -3.0, 1e-9);
        assert_approx_eq!(fractional.s, -4.0, 1e-9);
    }

    #[test]
    fn test_point_to_hex_near_center() {
        let layout = HexLayout::new(10.0).unwrap();
        let center = layout.hex_to_point(HexCoordinate::new(2, -1));
        // Anything well inside the inner circle belongs to the tile
        for vertex in vertices(center, 8.0).iter() {
            assert_eq!(layout.point_to_hex(*vertex), HexCoordinate::new(2, -1));
        }
    }

    #[test]
    fn test_neighbor_spacing() {
        let layout = HexLayout::new(4.0).unwrap();
        let center = layout.hex_to_point(HexCoordinate::ORIGIN);
        for neighbor in HexCoordinate::ORIGIN.neighbors().iter() {
            let distance = center.distance_to(layout.hex_to_point(*neighbor));
            assert_approx_eq!(distance, layout.height());
        }
        let east = layout.hex_to_point(HexCoordinate::new(1, -1));
        assert_approx_eq!(east.x, layout.horizontal_spacing());
    }

    #[test]
    fn test_vertices() {
        let center = Point::new(5.0, -2.0);
        let vertices = vertices(center, 3.0);

        assert_approx_eq!(vertices[0].x, 8.0);
        assert_approx_eq!(vertices[0].y, -2.0);
        assert_approx_eq!(vertices[3].x, 2.0);
        assert_approx_eq!(vertices[3].y, -2.0);
        // 60° is below the center, since +y is down
        assert!(vertices[1].y > center.y);

        for (i, vertex) in vertices.iter().enumerate() {
            assert_approx_eq!(center.distance_to(*vertex), 3.0);
            // Regular hexagon, so each side is the same length as the radius
            let next = vertices[(i + 1) % vertices.len()];
            assert_approx_eq!(vertex.distance_to(next), 3.0);
        }
    }

    #[test]
    fn test_adjacent_tiles_share_vertices() {
        let layout = HexLayout::new(1.0).unwrap();
        let a = layout.hex_vertices(HexCoordinate::ORIGIN);
        let b = layout.hex_vertices(HexCoordinate::new(1, 0));
        let shared = a
            .iter()
            .filter(|va| b.iter().any(|vb| va.distance_to(*vb) < 1e-9))
            .count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn test_layout_validation() {
        assert!(HexLayout::new(0.0).is_err());
        assert!(HexLayout::new(-1.0).is_err());
        assert!(HexLayout::new(f64::NAN).is_err());
        assert!(HexLayout::new(f64::INFINITY).is_err());
        let layout = HexLayout::new(2.5).unwrap();
        assert_eq!(layout.size(), 2.5);
        assert_eq!(layout.width(), 5.0);
    }
}
