pub mod config;
pub mod error;
pub mod grid;
pub mod iteration_matrix;
pub mod tile_rect;
pub mod viewport;

pub use config::{CalculatorConfig, CalculatorKind, DEFAULT_TILE_SIZE};
pub use error::CalcError;
pub use grid::GridModel;
pub use iteration_matrix::IterationMatrix;
pub use tile_rect::{TileRect, Tiles};
pub use viewport::Viewport;
