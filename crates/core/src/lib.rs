//! hexgrid is the math behind a hex tile map that gets drawn onto a 2D canvas.
//! It covers the flat-top cube coordinate system, conversion between hex
//! coordinates and planar positions, and the viewport math a front end needs
//! to pan, zoom, cull and hit-test a grid. Presentation layers are
//! implemented elsewhere.
//!
//! ```
//! use hexgrid::{GridConfig, HexCoordinate, HexMap, Point, Viewport};
//!
//! let config = GridConfig::default();
//! let layout = config.layout().unwrap();
//! let map = HexMap::new(config.map_radius, |pos| pos.distance_to(HexCoordinate::ORIGIN));
//!
//! let mut viewport = Viewport::new(&config.zoom, 800.0, 600.0);
//! viewport.pan(-40.0, 10.0);
//! let tiles = viewport.visible_tiles(&layout, &map);
//! let clicked = viewport.click(&layout, Point::new(400.0, 300.0));
//! println!("{} tiles on screen, selected {:?}", tiles.len(), clicked);
//! ```
//!
//! See [GridConfig] for details on how the grid can be customized.

mod camera;
mod config;
mod hex;
mod layout;
mod map;
#[cfg(feature = "svg")]
pub mod render;
mod util;

pub use crate::{
    camera::{Bounds, Viewport},
    config::{GridConfig, ZoomConfig},
    hex::{FractionalHex, HexCoordinate, HexDirection},
    layout::{
        hex_to_point, point_to_fractional_hex, point_to_hex, vertices,
        HexLayout, Point,
    },
    map::{HexCoordinateIndexMap, HexCoordinateMap, HexCoordinateSet, HexMap},
};

// Re-export for consumers that need to match on error types
pub use anyhow;
pub use validator;
// Needed by the wasm version of the timed! macro
#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use web_sys;
