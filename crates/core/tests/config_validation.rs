use hexgrid::{GridConfig, ZoomConfig};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        hex_size: 0.0,    // invalid
        map_radius: 10001, // invalid (too big)
        zoom: ZoomConfig {
            initial: 0.02, // valid
            min: 0.002,    // valid
            max: 0.5,      // valid
            step: 0.5,     // invalid, would invert scrolling
        },
    };

    // This is a bit of a lazy check but it works well enough
    let err = config.validated().unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["hex_size", "map_radius", "zoom"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_zoom_bounds_validation() {
    let config = GridConfig {
        zoom: ZoomConfig {
            initial: 1.0, // outside of [min, max]
            ..Default::default()
        },
        ..Default::default()
    };
    let err = config.validated().unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    assert_eq!(error_fields, vec!["zoom"]);
}

#[test]
fn test_deserialize_populates_defaults() {
    let config: GridConfig =
        serde_json::from_str(r#"{"hex_size": 50.0, "zoom": {"max": 2.0}}"#)
            .unwrap();
    assert_eq!(config.hex_size, 50.0);
    assert_eq!(config.map_radius, GridConfig::default().map_radius);
    assert_eq!(config.zoom.max, 2.0);
    assert_eq!(config.zoom.min, ZoomConfig::default().min);
    assert!(config.validated().is_ok());
}
