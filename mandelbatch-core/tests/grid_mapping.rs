use mandelbatch_core::{CalcError, CalculatorConfig, CalculatorKind, GridModel, Viewport};

#[test]
fn default_grid_samples_classic_view() {
    let grid = GridModel::new(8, 100).unwrap();
    assert_eq!(grid.coordinate(0, 0), (-2.0, -1.5));
    // Centre pixel lands at (-0.5, 0)
    assert_eq!(grid.coordinate(4, 4), (-0.5, 0.0));
}

#[test]
fn tiles_partition_grid_without_overlap() {
    let grid = GridModel::new(256, 10).unwrap();
    let mut seen = vec![0u8; grid.pixel_count()];
    for tile in grid.tiles(64).unwrap() {
        for row in tile.rows() {
            for col in tile.columns() {
                seen[row * grid.width() + col] += 1;
            }
        }
    }
    assert!(seen.iter().all(|&n| n == 1));
}

#[test]
fn config_roundtrips_through_json() {
    let config = CalculatorConfig::new(CalculatorKind::Batch, 128, 500)
        .with_tile_size(32)
        .with_viewport(Viewport::new(-0.8, 0.05, 0.001, 0.001));
    let json = serde_json::to_string(&config).unwrap();
    let restored = CalculatorConfig::from_json(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn config_errors_render_readable_messages() {
    let err = CalculatorConfig::new(CalculatorKind::Batch, 100, 10)
        .validate()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Grid size 100 is not divisible by tile size 64"
    );
    assert_eq!(
        CalcError::InvalidLimit(0).to_string(),
        "Iteration limit must be positive, got 0"
    );
}
