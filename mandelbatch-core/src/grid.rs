//! Grid geometry and the index-to-coordinate mapping.

use crate::{CalcError, Tiles, Viewport};

/// Square grid mapped onto the complex plane, plus the iteration limit.
///
/// Width and height are both `grid_size`; rectangular grids are not supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridModel {
    size: u32,
    limit: u32,
    viewport: Viewport,
}

impl GridModel {
    /// Grid over the classic Mandelbrot view.
    pub fn new(grid_size: u32, limit: u32) -> Result<Self, CalcError> {
        let viewport = Viewport::default_for(grid_size)?;
        Self::with_viewport(grid_size, limit, viewport)
    }

    pub fn with_viewport(
        grid_size: u32,
        limit: u32,
        viewport: Viewport,
    ) -> Result<Self, CalcError> {
        if grid_size == 0 {
            return Err(CalcError::InvalidGridSize(grid_size));
        }
        if limit == 0 {
            return Err(CalcError::InvalidLimit(limit));
        }
        viewport.validate()?;

        Ok(Self {
            size: grid_size,
            limit,
            viewport,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.size as usize
    }

    pub fn grid_size(&self) -> u32 {
        self.size
    }

    /// Maximum iteration count, also the "did not escape" sentinel.
    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn column_real(&self, j: usize) -> f32 {
        self.viewport.real_at(j)
    }

    #[inline]
    pub fn row_imag(&self, i: usize) -> f32 {
        self.viewport.imag_at(i)
    }

    /// Complex coordinate `c` of pixel (row `i`, column `j`).
    #[inline]
    pub fn coordinate(&self, i: usize, j: usize) -> (f32, f32) {
        (self.column_real(j), self.row_imag(i))
    }

    /// Check that square tiles of `tile_size` partition the grid exactly.
    pub fn check_tile_size(&self, tile_size: u32) -> Result<(), CalcError> {
        if tile_size == 0 || self.size % tile_size != 0 {
            return Err(CalcError::TileMismatch {
                grid_size: self.size,
                tile_size,
            });
        }
        Ok(())
    }

    /// Tiles covering the grid in row-major tile order.
    pub fn tiles(&self, tile_size: u32) -> Result<Tiles, CalcError> {
        self.check_tile_size(tile_size)?;
        Ok(Tiles::new(self.size, tile_size))
    }
}
