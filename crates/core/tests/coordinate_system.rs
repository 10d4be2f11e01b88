//! End-to-end checks of the coordinate system through the public API

use assert_approx_eq::assert_approx_eq;
use hexgrid::{
    hex_to_point, point_to_hex, vertices, FractionalHex, HexCoordinate,
    HexLayout, Point,
};

/// Small deterministic spread of coordinates, including some far from the
/// origin
fn sample_coordinates() -> Vec<HexCoordinate> {
    let mut coordinates: Vec<_> = HexCoordinate::ORIGIN.range(6).collect();
    coordinates.extend(&[
        HexCoordinate::new(1000, -2000),
        HexCoordinate::new(-4321, 17),
        HexCoordinate::new(77, 77),
    ]);
    coordinates
}

#[test]
fn test_make_hex_invariant() {
    for q in -20..=20 {
        for r in -20..=20 {
            let hex = HexCoordinate::new(q, r);
            assert_eq!(hex.q() + hex.r() + hex.s(), 0, "{}", hex);
        }
    }
}

#[test]
fn test_point_round_trip() {
    for &size in &[0.25, 1.0, 64.0, 2000.0] {
        for hex in sample_coordinates() {
            assert_eq!(point_to_hex(hex_to_point(hex, size), size), hex);
        }
    }
}

#[test]
fn test_distance_properties() {
    let coordinates = sample_coordinates();
    for a in &coordinates {
        assert_eq!(a.distance_to(*a), 0);
        for b in &coordinates {
            let distance = a.distance_to(*b);
            assert_eq!(distance, b.distance_to(*a));
            assert_eq!(distance == 0, a == b);
            // Triangle inequality through the origin
            assert!(distance <= a.length() + b.length());
        }
        for neighbor in a.neighbors().iter() {
            assert_eq!(a.distance_to(*neighbor), 1);
        }
    }
}

#[test]
fn test_distance_is_step_count() {
    // Walking a line takes exactly `distance` single steps
    let a = HexCoordinate::new(-3, 5);
    let b = HexCoordinate::new(4, -6);
    let line = a.line_to(b);
    assert_eq!(line.len() as u32, a.distance_to(b) + 1);
}

#[test]
fn test_concrete_scenarios() {
    let point = hex_to_point(HexCoordinate::new(1, 0), 2000.0);
    assert_approx_eq!(point.x, 3000.0);
    assert_approx_eq!(point.y, 1000.0 * 3f64.sqrt(), 1e-6);

    assert_eq!(
        HexCoordinate::ORIGIN.distance_to(HexCoordinate::new(2, -1)),
        2
    );

    let neighbors: Vec<(i32, i32, i32)> = HexCoordinate::ORIGIN
        .neighbors()
        .iter()
        .map(|n| (n.q(), n.r(), n.s()))
        .collect();
    assert_eq!(
        neighbors,
        vec![
            (1, 0, -1),
            (1, -1, 0),
            (0, -1, 1),
            (-1, 0, 1),
            (-1, 1, 0),
            (0, 1, -1)
        ]
    );
}

#[test]
fn test_rounding_tie_break() {
    let rounded = FractionalHex::from_cube(0.5, 0.5, -1.0).round();
    assert_eq!(rounded.s(), -1);
    assert_eq!(rounded.q() + rounded.r() + rounded.s(), 0);
    assert_eq!((rounded.q(), rounded.r()), (0, 1));
}

#[test]
fn test_vertices_form_regular_hexagon() {
    let center = Point::new(-12.0, 40.0);
    let corners = vertices(center, 5.0);
    for (i, corner) in corners.iter().enumerate() {
        let angle = (corner.y - center.y).atan2(corner.x - center.x);
        let expected = (60.0 * i as f64).to_radians();
        // atan2 wraps to (-pi, pi]
        let diff = (angle - expected).rem_euclid(std::f64::consts::TAU);
        assert!(diff < 1e-9 || (std::f64::consts::TAU - diff) < 1e-9);
        assert_approx_eq!(center.distance_to(*corner), 5.0);
    }
}

#[test]
fn test_layout_matches_free_functions() {
    let layout = HexLayout::new(13.0).unwrap();
    let hex = HexCoordinate::new(-2, 7);
    assert_eq!(layout.hex_to_point(hex), hex_to_point(hex, 13.0));
    assert_eq!(layout.hex_vertices(hex), vertices(hex_to_point(hex, 13.0), 13.0));
    let point = Point::new(101.0, -33.0);
    assert_eq!(layout.point_to_hex(point), point_to_hex(point, 13.0));
}
