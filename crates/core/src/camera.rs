//! A 2D camera over a hex grid. A [Viewport] knows which part of planar space
//! is shown on a screen (canvas) of some size, and handles the math a front
//! end needs around that: panning, zooming, converting between screen and
//! world positions, figuring out which tiles are on screen, and turning clicks
//! into tiles.
//!
//! Screen space is measured in pixels with the origin at the top-left corner
//! of the screen, `+x` right and `+y` down. World space is planar space as
//! described in [crate::layout]. Since both have `+y` down, there's no
//! flipping, just a translation and a scale.

use crate::{HexCoordinate, HexLayout, HexMap, Point, ZoomConfig};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in planar space, inclusive on all sides
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Grow the rectangle by `amount` on every side
    pub fn pad(&self, amount: f64) -> Self {
        let offset = Point::new(amount, amount);
        Self::new(self.min - offset, self.max + offset)
    }
}

/// The state of a camera looking down at a hex grid. See module-level docs
/// for a description of screen vs world space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The world position displayed at the center of the screen
    center: Point,
    /// Screen pixels per world unit
    zoom: f64,
    /// Screen width, in pixels
    width: f64,
    /// Screen height, in pixels
    height: f64,
    zoom_config: ZoomConfig,
    /// The tile that was most recently clicked, if any
    selected: Option<HexCoordinate>,
}

impl Viewport {
    /// Create a new viewport for a screen of the given size (in pixels). The
    /// viewport starts centered on the world origin, at the configured initial
    /// zoom level.
    pub fn new(zoom_config: &ZoomConfig, width: f64, height: f64) -> Self {
        Self {
            center: Point::ORIGIN,
            zoom: zoom_config.clamp(zoom_config.initial),
            width,
            height,
            zoom_config: *zoom_config,
            selected: None,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn selected(&self) -> Option<HexCoordinate> {
        self.selected
    }

    /// Update the screen size, e.g. after the canvas was resized. The world
    /// center stays where it is.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        debug!("Viewport resized to {}x{}", width, height);
    }

    /// Move the camera so the world center is the given point
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Move the camera so that a tile is in the middle of the screen
    pub fn center_on(&mut self, layout: &HexLayout, hex: HexCoordinate) {
        self.set_center(layout.hex_to_point(hex));
    }

    /// Set the zoom level directly, keeping the same world center. The level
    /// is clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.zoom_config.clamp(zoom);
    }

    /// Apply a drag of `(dx, dy)` screen pixels. The world follows the cursor,
    /// so dragging right moves the camera left.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center -= Point::new(dx, dy) / self.zoom;
        debug!("Viewport panned to {}", self.center);
    }

    /// Multiply the zoom level by `factor`, anchored on a screen position: the
    /// world point under `anchor` is still under it after zooming. The new zoom
    /// is clamped to the configured bounds. Factors that aren't positive
    /// numbers are ignored.
    pub fn zoom_at(&mut self, factor: f64, anchor: Point) {
        if !(factor.is_finite() && factor > 0.0) {
            debug!("Ignoring invalid zoom factor {}", factor);
            return;
        }

        let anchor_world = self.screen_to_world(anchor);
        self.zoom = self.zoom_config.clamp(self.zoom * factor);
        // Shift the center so that anchor_world maps back onto anchor
        self.center = anchor_world - (anchor - self.screen_center()) / self.zoom;
        debug!("Viewport zoomed to {} around {}", self.zoom, anchor_world);
    }

    /// Zoom by a number of scroll wheel steps. Positive steps zoom in, negative
    /// steps zoom out. Fractional steps are allowed, for smooth scrolling.
    pub fn zoom_steps_at(&mut self, steps: f64, anchor: Point) {
        self.zoom_at(self.zoom_config.step.powf(steps), anchor);
    }

    /// Convert a position on the screen (in pixels) to a position in the world
    pub fn screen_to_world(&self, point: Point) -> Point {
        self.center + (point - self.screen_center()) / self.zoom
    }

    /// Convert a position in the world to a position on the screen (in
    /// pixels). The result may be off screen.
    pub fn world_to_screen(&self, point: Point) -> Point {
        (point - self.center) * self.zoom + self.screen_center()
    }

    /// The rectangle of world space that is visible on screen
    pub fn world_bounds(&self) -> Bounds {
        Bounds::new(
            self.screen_to_world(Point::ORIGIN),
            self.screen_to_world(Point::new(self.width, self.height)),
        )
    }

    /// Get every tile that is at least partially visible on screen. This is
    /// a conservative check: a tile is included if its center is within one
    /// hex size of the visible rectangle, so a few tiles just off the corners
    /// may be included too. Tiles are ordered by ascending `q`, then ascending
    /// `r`.
    ///
    /// The work done here grows with the visible area. When only tiles near
    /// the origin matter, use [Self::visible_hexes_within] instead.
    pub fn visible_hexes(&self, layout: &HexLayout) -> Vec<HexCoordinate> {
        self.cull(layout, None)
    }

    /// Like [Self::visible_hexes], but only tiles within `radius` steps of the
    /// origin are considered. The work done is bounded by the smaller of the
    /// visible area and the area of that radius, so zooming far out over a
    /// small map stays cheap.
    pub fn visible_hexes_within(
        &self,
        layout: &HexLayout,
        radius: u32,
    ) -> Vec<HexCoordinate> {
        self.cull(layout, Some(radius))
    }

    /// Get every tile that is visible on screen **and** part of the given map.
    /// See [Self::visible_hexes].
    pub fn visible_tiles<T>(
        &self,
        layout: &HexLayout,
        map: &HexMap<T>,
    ) -> Vec<HexCoordinate> {
        self.visible_hexes_within(layout, map.radius().into())
            .into_iter()
            .filter(|hex| map.contains(*hex))
            .collect()
    }

    fn cull(
        &self,
        layout: &HexLayout,
        radius: Option<u32>,
    ) -> Vec<HexCoordinate> {
        let size = layout.size();
        let bounds = self.world_bounds().pad(size);

        // Walk the columns that can overlap the bounds. Each column is a
        // constant q, and its centers are spaced out evenly in y, so we can
        // solve for the range of r directly instead of testing every tile.
        // Ranges are widened by one in each direction to absorb float error,
        // then the bounds check below filters out the extras. Float to int
        // casts saturate, so huge bounds can't overflow here.
        let column_width = layout.horizontal_spacing();
        let row_height = layout.vertical_spacing();
        let q_low = (bounds.min.x / column_width).floor() as i32;
        let q_high = (bounds.max.x / column_width).ceil() as i32;
        let mut q_min = q_low.saturating_sub(1);
        let mut q_max = q_high.saturating_add(1);

        // Same as HexCoordinate::range: |q|, |r| and |q + r| are all at most n
        let limit = radius.map(|radius| {
            radius.min(HexCoordinate::MAX_COMPONENT.unsigned_abs()) as i32
        });
        if let Some(n) = limit {
            q_min = q_min.max(-n);
            q_max = q_max.min(n);
        }

        let mut hexes = Vec::new();
        for q in q_min..=q_max {
            // y = row_height * (r + q/2)  =>  r = y/row_height - q/2
            let offset = f64::from(q) / 2.0;
            let r_low = (bounds.min.y / row_height - offset).floor() as i32;
            let r_high = (bounds.max.y / row_height - offset).ceil() as i32;
            let mut r_min = r_low.saturating_sub(1);
            let mut r_max = r_high.saturating_add(1);
            if let Some(n) = limit {
                r_min = r_min.max(-n).max(-q - n);
                r_max = r_max.min(n).min(-q + n);
            }
            hexes.extend(
                (r_min..=r_max)
                    .map(|r| HexCoordinate::new(q, r))
                    .filter(|hex| bounds.contains(layout.hex_to_point(*hex))),
            );
        }

        trace!("{} hexes visible in {:?}", hexes.len(), bounds);
        hexes
    }

    /// Get the tile under a screen position. This is whichever tile has its
    /// center nearest to the corresponding world position; the position isn't
    /// tested against the tile's actual hexagon. Returns `None` if the position
    /// isn't a finite point.
    pub fn hex_at(
        &self,
        layout: &HexLayout,
        point: Point,
    ) -> Option<HexCoordinate> {
        let world = self.screen_to_world(point);
        if world.x.is_finite() && world.y.is_finite() {
            Some(layout.point_to_hex(world))
        } else {
            None
        }
    }

    /// Handle a click at a screen position. The tile under the click becomes
    /// selected, unless it was already selected, in which case the selection
    /// is cleared. Clicks that don't land on a finite point are ignored.
    /// Returns the new selection.
    pub fn click(
        &mut self,
        layout: &HexLayout,
        point: Point,
    ) -> Option<HexCoordinate> {
        match self.hex_at(layout, point) {
            Some(hex) if self.selected == Some(hex) => self.clear_selection(),
            Some(hex) => self.select(hex),
            None => debug!("Ignoring click at non-finite position {}", point),
        }
        self.selected
    }

    pub fn select(&mut self, hex: HexCoordinate) {
        debug!("Selected {}", hex);
        self.selected = Some(hex);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Pixel position of the middle of the screen
    fn screen_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}
