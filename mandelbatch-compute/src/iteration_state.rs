//! Per-pixel iteration state shared by every strategy.

use crate::aligned_buffer::AlignedBuffer;
use crate::lanes::Segment;
use mandelbatch_core::{CalcError, GridModel, IterationMatrix};

/// Structure-of-arrays iteration state for a whole grid.
///
/// Built once per calculator: counts start at the sentinel `limit` and the
/// iterate starts at the pixel coordinate (z₀ = c).
#[derive(Debug)]
pub struct IterationState {
    grid: GridModel,
    counts: AlignedBuffer<u32>,
    z_re: AlignedBuffer<f32>,
    z_im: AlignedBuffer<f32>,
    /// Real part of c per column; identical for every row.
    c_re: AlignedBuffer<f32>,
}

impl IterationState {
    pub fn new(grid: GridModel) -> Result<Self, CalcError> {
        let width = grid.width();
        let pixels = grid.pixel_count();

        let c_re = AlignedBuffer::from_fn(width, |j| grid.column_real(j))?;
        let counts = AlignedBuffer::filled(pixels, grid.limit())?;
        let z_re = AlignedBuffer::from_fn(pixels, |index| c_re.as_slice()[index % width])?;
        let z_im = AlignedBuffer::from_fn(pixels, |index| grid.row_imag(index / width))?;

        let state = Self {
            grid,
            counts,
            z_re,
            z_im,
            c_re,
        };
        log::debug!(
            "Initialized {}x{} iteration state (limit {}, {} bytes)",
            grid.width(),
            grid.height(),
            grid.limit(),
            state.allocated_bytes()
        );
        Ok(state)
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn allocated_bytes(&self) -> usize {
        self.counts.allocated_bytes()
            + self.z_re.allocated_bytes()
            + self.z_im.allocated_bytes()
            + self.c_re.allocated_bytes()
    }

    /// State for columns `columns` of row `row`.
    pub fn segment(&mut self, row: usize, columns: std::ops::Range<usize>) -> Segment<'_> {
        let width = self.grid.width();
        let start = row * width + columns.start;
        let end = row * width + columns.end;

        Segment {
            z_re: &mut self.z_re.as_mut_slice()[start..end],
            z_im: &mut self.z_im.as_mut_slice()[start..end],
            counts: &mut self.counts.as_mut_slice()[start..end],
            c_re: &self.c_re.as_slice()[columns],
            c_im: self.grid.row_imag(row),
        }
    }

    /// Full row `row` as a single segment.
    pub fn row(&mut self, row: usize) -> Segment<'_> {
        let width = self.grid.width();
        self.segment(row, 0..width)
    }

    pub fn counts(&self) -> &[u32] {
        self.counts.as_slice()
    }

    /// Hand the finished counts out, releasing the iterate buffers.
    pub fn into_matrix(self) -> IterationMatrix {
        IterationMatrix::new(
            self.grid.width(),
            self.grid.height(),
            self.grid.limit(),
            self.counts.to_vec(),
        )
    }
}
