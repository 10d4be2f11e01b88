use crate::HexLayout;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a hex grid and how it's viewed. This is the one
/// place that the hex size comes from, so that every conversion in a program
/// uses the same value.
///
/// When deserializing, any missing field is populated from the default.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of a tile to each of its vertices, in world
    /// units. The default is sized for a map in meters.
    #[validate(range(min = 0.001))]
    pub hex_size: f64,

    /// Distance from the center of the map to the edge (in tiles).
    #[validate(range(min = 0, max = 10000))]
    pub map_radius: u16,

    /// Zoom behavior for viewports onto the grid
    #[validate]
    pub zoom: ZoomConfig,
}

/// Configuration for viewport zooming. All zoom levels are expressed in screen
/// pixels per world unit, so bigger is closer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_zoom_bounds"))]
#[serde(default)]
pub struct ZoomConfig {
    /// Zoom level of a freshly created viewport
    #[validate(range(min = 0.0))]
    pub initial: f64,

    /// Furthest out a viewport can zoom
    #[validate(range(min = 0.0))]
    pub min: f64,

    /// Furthest in a viewport can zoom
    #[validate(range(min = 0.0))]
    pub max: f64,

    /// Factor that zoom is multiplied (or divided) by for each step of a
    /// scroll wheel. Must be at least 1.0, otherwise scrolling would be
    /// inverted.
    #[validate(range(min = 1.0))]
    pub step: f64,
}

impl GridConfig {
    /// Validate this config, returning it if it's valid
    pub fn validated(self) -> anyhow::Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Build the layout that converts between hex and planar space for this
    /// grid
    pub fn layout(&self) -> anyhow::Result<HexLayout> {
        HexLayout::new(self.hex_size)
    }
}

impl ZoomConfig {
    /// Clamp a zoom level into `[min, max]`
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hex_size: 2000.0,
            map_radius: 20,
            zoom: ZoomConfig::default(),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        // With the default hex size, 0.02 puts a tile at 80px wide
        Self {
            initial: 0.02,
            min: 0.002,
            max: 0.5,
            step: 1.1,
        }
    }
}

/// Zoom levels have to be positive, and the initial level has to fall within
/// the bounds
fn validate_zoom_bounds(config: &ZoomConfig) -> Result<(), ValidationError> {
    if config.min <= 0.0 {
        return Err(ValidationError::new("min_zoom_not_positive"));
    }
    if config.min > config.max {
        return Err(ValidationError::new("min_zoom_above_max"));
    }
    if config.initial < config.min || config.initial > config.max {
        return Err(ValidationError::new("initial_zoom_out_of_bounds"));
    }
    Ok(())
}
