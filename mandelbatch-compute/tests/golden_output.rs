//! Golden-output regression for a tiny grid over [-2, 2) x [-2, 2).

use mandelbatch_compute::{
    BatchCalculator, Calculator, LineCalculator, ReferenceCalculator, Viewport,
};

const LIMIT: u32 = 50;

#[rustfmt::skip]
const EXPECTED: [u32; 16] = [
     0,  0,  1,  0,
     0,  2, 50,  1,
    50, 50, 50,  2,
     0,  2, 50,  1,
];

fn viewport() -> Viewport {
    Viewport::from_bounds((-2.0, 2.0), (-2.0, 2.0), 4).expect("valid bounds")
}

#[test]
fn reference_matches_golden() {
    let matrix = ReferenceCalculator::with_viewport(4, LIMIT, viewport())
        .unwrap()
        .run();
    assert_eq!(matrix.as_slice(), &EXPECTED);
}

#[test]
fn line_matches_golden() {
    let matrix = LineCalculator::with_viewport(4, LIMIT, viewport())
        .unwrap()
        .run();
    assert_eq!(matrix.as_slice(), &EXPECTED);
}

#[test]
fn batch_matches_golden_for_every_tile_size() {
    for tile_size in [1, 2, 4] {
        let matrix = BatchCalculator::with_tile_size(4, LIMIT, viewport(), tile_size)
            .unwrap()
            .run();
        assert_eq!(matrix.as_slice(), &EXPECTED, "tile size {tile_size}");
    }
}

#[test]
fn golden_rows_read_top_to_bottom() {
    let matrix = LineCalculator::with_viewport(4, LIMIT, viewport())
        .unwrap()
        .run();
    // Row 0 is Im(c) = -2, column 2 is Re(c) = 0: c = -2i escapes after one step
    assert_eq!(matrix.get(0, 2), Some(1));
    // Row 2 is the real axis: -2, -1 and 0 all stay bounded
    assert_eq!(matrix.row(2), &[50, 50, 50, 2]);
}
