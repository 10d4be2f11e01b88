use crate::{Bounds, HexCoordinate, HexLayout, Point};
use svg::{
    node::{element::Polygon, Comment},
    Document,
};

const TILE_COLOR: &str = "#8fbf6a";
const SELECTED_COLOR: &str = "#f5c542";
const OUTLINE_COLOR: &str = "#333333";

/// Render a set of tiles as an SVG, one outlined hexagon per tile. The view
/// box is fitted to the tiles. If `selected` is one of the tiles, it gets
/// highlighted.
pub fn hexes_to_svg(
    layout: &HexLayout,
    hexes: &[HexCoordinate],
    selected: Option<HexCoordinate>,
) -> Document {
    let bounds = fit_bounds(layout, hexes);
    let mut document = Document::new()
        .set(
            "viewBox",
            (
                // Top-left corner
                bounds.min.x,
                bounds.min.y,
                // Width and height
                bounds.width(),
                bounds.height(),
            ),
        )
        .add(Comment::new(format!(" hex size: {} ", layout.size())));

    for hex in hexes {
        let fill = if selected == Some(*hex) {
            SELECTED_COLOR
        } else {
            TILE_COLOR
        };
        document = document
            .add(Comment::new(hex.to_string())) // Readability!
            .add(
                Polygon::new()
                    .set(
                        "points",
                        layout
                            .hex_vertices(*hex)
                            .iter()
                            .map(|vertex| (vertex.x, vertex.y))
                            .collect::<Vec<_>>(),
                    )
                    .set("fill", fill)
                    .set("stroke", OUTLINE_COLOR)
                    .set("stroke-width", layout.size() * 0.05),
            );
    }

    document
}

/// Smallest rectangle that holds every vertex of the given tiles
fn fit_bounds(layout: &HexLayout, hexes: &[HexCoordinate]) -> Bounds {
    let mut vertices = hexes.iter().flat_map(|hex| layout.hex_vertices(*hex));
    let first = match vertices.next() {
        Some(vertex) => vertex,
        None => return Bounds::new(Point::ORIGIN, Point::ORIGIN),
    };
    vertices.fold(Bounds::new(first, first), |bounds, vertex| {
        Bounds::new(
            Point::new(bounds.min.x.min(vertex.x), bounds.min.y.min(vertex.y)),
            Point::new(bounds.max.x.max(vertex.x), bounds.max.y.max(vertex.y)),
        )
    })
}
