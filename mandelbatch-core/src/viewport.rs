use crate::CalcError;
use serde::{Deserialize, Serialize};

/// Viewport in the complex plane, expressed as a grid origin plus per-pixel step.
///
/// - `x_start`, `y_start`: coordinate of grid index (0, 0)
/// - `dx`, `dy`: distance between neighbouring columns / rows
///
/// Values are kept in f64; the iteration engine rounds mapped coordinates to f32.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_start: f64,
    pub y_start: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Viewport {
    /// Default real axis bounds of the classic Mandelbrot view.
    pub const DEFAULT_X_RANGE: (f64, f64) = (-2.0, 1.0);
    /// Default imaginary axis bounds of the classic Mandelbrot view.
    pub const DEFAULT_Y_RANGE: (f64, f64) = (-1.5, 1.5);

    pub fn new(x_start: f64, y_start: f64, dx: f64, dy: f64) -> Self {
        Self {
            x_start,
            y_start,
            dx,
            dy,
        }
    }

    /// Derive a viewport from a bounding box sampled by a square grid.
    ///
    /// The step is `(end - start) / grid_size`, so the end bound itself is never sampled.
    pub fn from_bounds(
        x_range: (f64, f64),
        y_range: (f64, f64),
        grid_size: u32,
    ) -> Result<Self, CalcError> {
        if grid_size == 0 {
            return Err(CalcError::InvalidGridSize(grid_size));
        }
        let n = grid_size as f64;
        let viewport = Self {
            x_start: x_range.0,
            y_start: y_range.0,
            dx: (x_range.1 - x_range.0) / n,
            dy: (y_range.1 - y_range.0) / n,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    /// The classic view `[-2, 1] x [-1.5, 1.5]` for a grid of the given size.
    pub fn default_for(grid_size: u32) -> Result<Self, CalcError> {
        Self::from_bounds(Self::DEFAULT_X_RANGE, Self::DEFAULT_Y_RANGE, grid_size)
    }

    /// Reject non-finite origins and degenerate steps.
    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.x_start.is_finite() || !self.y_start.is_finite() {
            return Err(CalcError::InvalidViewport(format!(
                "origin ({}, {}) is not finite",
                self.x_start, self.y_start
            )));
        }
        if !self.dx.is_finite() || !self.dy.is_finite() || self.dx == 0.0 || self.dy == 0.0 {
            return Err(CalcError::InvalidViewport(format!(
                "step ({}, {}) must be finite and non-zero",
                self.dx, self.dy
            )));
        }
        Ok(())
    }

    /// Real part of the coordinate for column `j`.
    #[inline]
    pub fn real_at(&self, j: usize) -> f32 {
        (self.x_start + j as f64 * self.dx) as f32
    }

    /// Imaginary part of the coordinate for row `i`.
    #[inline]
    pub fn imag_at(&self, i: usize) -> f32 {
        (self.y_start + i as f64 * self.dy) as f32
    }
}
