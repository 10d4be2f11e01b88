//! Debug output of grid geometry. This isn't meant to be the way a game draws
//! its map; it's a quick way to eyeball layouts and culling results.

mod svg;

pub use self::svg::hexes_to_svg;
