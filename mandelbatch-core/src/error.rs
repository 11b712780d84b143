//! Calculator error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Grid size must be positive, got {0}")]
    InvalidGridSize(u32),

    #[error("Iteration limit must be positive, got {0}")]
    InvalidLimit(u32),

    #[error("Grid size {grid_size} is not divisible by tile size {tile_size}")]
    TileMismatch { grid_size: u32, tile_size: u32 },

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Failed to allocate aligned buffer of {elements} elements")]
    Allocation { elements: usize },

    #[error("Iteration matrix of {width}x{height} cannot hold {cells} cells")]
    MatrixShape {
        width: usize,
        height: usize,
        cells: usize,
    },

    #[error("Segment slices differ in length: expected {expected}, got {actual}")]
    SegmentLength { expected: usize, actual: usize },

    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Config(err.to_string())
    }
}
