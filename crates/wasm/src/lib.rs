//! This crate provides WebAssembly bindings for hexgrid. The [HexGrid] struct
//! is the main interface: it owns a grid layout and a viewport onto it, and
//! turns canvas events (resizes, drags, scrolls, clicks) into viewport changes.
//! A front end then asks it which tiles to draw, and where.
//!
//! All positions passed into [HexGrid] methods named `*_at`, as well as
//! [HexGrid::click], are in screen pixels relative to the top-left of the
//! canvas. Positions returned by [HexGrid::hex_to_point] and
//! [HexGrid::hex_vertices] are in world space; use
//! [HexGrid::world_to_screen] to place them on the canvas.
//!
//! You probably won't ever want to include this crate in another Rust project.
//! Instead, use `wasm-pack` to build this into an npm package, then import that
//! into your JS project.

mod util;

use crate::util::{
    deserialize_config, to_js, to_js_typed, validate_config, ResultExt,
};
use hexgrid::{HexCoordinate, HexLayout, Point, Viewport};
use log::info;
use std::sync::Once;
use wasm_bindgen::prelude::*;

static INIT: Once = Once::new();

/// Install the panic hook and logger. These are global, so only the first
/// call does anything.
fn init_globals() {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        wasm_logger::init(wasm_logger::Config::default());
    });
}

/// Get the default grid config as a JS object.
#[wasm_bindgen]
pub fn default_grid_config() -> Result<GridConfigObject, JsValue> {
    to_js_typed(&hexgrid::GridConfig::default())
}

/// Verify that the given JS object is a valid grid config. Return the
/// validated config, with all defaults populated, if it's valid. Return an
/// error if it isn't.
#[wasm_bindgen]
pub fn validate_grid_config(
    input: GridConfigObject,
) -> Result<GridConfigObject, JsValue> {
    let config = validate_config(&input)?;
    to_js_typed(&config)
}

/// A hex grid being displayed on a canvas. Holds everything needed to map
/// between the canvas and the grid.
#[wasm_bindgen]
pub struct HexGrid {
    layout: HexLayout,
    map_radius: u16,
    viewport: Viewport,
}

#[wasm_bindgen]
impl HexGrid {
    /// Create a grid for a canvas of the given size (in pixels). The config
    /// can be partial; missing fields are populated from the default.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: GridConfigObject,
        width: f64,
        height: f64,
    ) -> Result<HexGrid, JsValue> {
        init_globals();
        let config = deserialize_config(&config)?.validated().into_js()?;
        let layout = config.layout().into_js()?;
        info!(
            "Created grid with hex size {} and radius {}",
            layout.size(),
            config.map_radius
        );
        Ok(Self {
            layout,
            map_radius: config.map_radius,
            viewport: Viewport::new(&config.zoom, width, height),
        })
    }

    /// Current zoom level, in screen pixels per world unit
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Call this whenever the canvas changes size
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
    }

    /// Apply a drag of `(dx, dy)` pixels
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.viewport.pan(dx, dy);
    }

    /// Multiply the zoom by `factor`, keeping the position under `(x, y)`
    /// fixed
    pub fn zoom_at(&mut self, factor: f64, x: f64, y: f64) {
        self.viewport.zoom_at(factor, Point::new(x, y));
    }

    /// Zoom by a number of scroll wheel steps around `(x, y)`. Positive zooms
    /// in.
    pub fn zoom_steps_at(&mut self, steps: f64, x: f64, y: f64) {
        self.viewport.zoom_steps_at(steps, Point::new(x, y));
    }

    /// Toggle selection of the tile under a click. Clicks outside the map
    /// clear the selection, and clicks at non-finite positions are ignored.
    /// Returns the new selection, or `null`.
    pub fn click(&mut self, x: f64, y: f64) -> Result<NullableHex, JsValue> {
        let point = Point::new(x, y);
        match self.viewport.hex_at(&self.layout, point) {
            Some(hex) if self.in_map(hex) => {
                self.viewport.click(&self.layout, point);
            }
            Some(_) => self.viewport.clear_selection(),
            None => {}
        }
        self.selected()
    }

    /// The currently selected tile, or `null`
    pub fn selected(&self) -> Result<NullableHex, JsValue> {
        to_js_typed(&self.viewport.selected())
    }

    /// Every tile in the map that is at least partially on screen
    pub fn visible_hexes(&self) -> Result<HexArray, JsValue> {
        to_js_typed(
            &self
                .viewport
                .visible_hexes_within(&self.layout, self.map_radius.into()),
        )
    }

    /// World position of a tile's center
    pub fn hex_to_point(&self, q: i32, r: i32) -> Result<PointObject, JsValue> {
        let hex = HexCoordinate::try_new(q, r).into_js()?;
        to_js_typed(&self.layout.hex_to_point(hex))
    }

    /// World positions of a tile's six vertices, starting from the right-most
    /// and going clockwise on screen
    pub fn hex_vertices(&self, q: i32, r: i32) -> Result<PointArray, JsValue> {
        let hex = HexCoordinate::try_new(q, r).into_js()?;
        to_js_typed(&self.layout.hex_vertices(hex))
    }

    /// Convert a world position to a screen position
    pub fn world_to_screen(
        &self,
        x: f64,
        y: f64,
    ) -> Result<PointObject, JsValue> {
        to_js_typed(&self.viewport.world_to_screen(Point::new(x, y)))
    }

    /// The map tile under a screen position, or `null` if it's off the map or
    /// the position isn't finite
    pub fn hex_at(&self, x: f64, y: f64) -> Result<NullableHex, JsValue> {
        let hex = self.viewport.hex_at(&self.layout, Point::new(x, y));
        to_js_typed(&hex.filter(|hex| self.in_map(*hex)))
    }

    /// Number of steps between two tiles
    pub fn distance(
        &self,
        q1: i32,
        r1: i32,
        q2: i32,
        r2: i32,
    ) -> Result<u32, JsValue> {
        let from = HexCoordinate::try_new(q1, r1).into_js()?;
        let to = HexCoordinate::try_new(q2, r2).into_js()?;
        Ok(from.distance_to(to))
    }

    /// The six neighbors of a tile, starting with south-east and going
    /// counter-clockwise. Neighbors off the map are included.
    pub fn neighbors(&self, q: i32, r: i32) -> Result<HexArray, JsValue> {
        to_js_typed(&HexCoordinate::try_new(q, r).into_js()?.neighbors())
    }

    /// The full viewport state, for debugging
    pub fn viewport(&self) -> Result<JsValue, JsValue> {
        to_js(&self.viewport)
    }
}

impl HexGrid {
    fn in_map(&self, hex: HexCoordinate) -> bool {
        hex.length() <= u32::from(self.map_radius)
    }
}

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"

/**
 * See description in the `extern "C"` section below
 */
export interface GridConfigObject {
    hex_size: number;
    map_radius: number;
    zoom: {
        initial: number;
        min: number;
        max: number;
        step: number;
    };
}

export interface HexCoordinate {
    q: number;
    r: number;
    s: number;
}

export interface Point {
    x: number;
    y: number;
}
"#;

#[wasm_bindgen]
extern "C" {
    /// A TS version of the [hexgrid::GridConfig] type from the core crate.
    /// This represents what **can be deserialized into a GridConfig**, so
    /// every field may be omitted.
    ///
    /// **It is very important that this stays up to date with the
    /// [hexgrid::GridConfig] type**.
    #[wasm_bindgen(typescript_type = "Partial<GridConfigObject>")]
    pub type GridConfigObject;

    #[wasm_bindgen(typescript_type = "HexCoordinate | null")]
    pub type NullableHex;

    #[wasm_bindgen(typescript_type = "HexCoordinate[]")]
    pub type HexArray;

    #[wasm_bindgen(typescript_type = "Point")]
    pub type PointObject;

    #[wasm_bindgen(typescript_type = "Point[]")]
    pub type PointArray;
}
