//! Row-major strategy: each grid row is advanced in lock-step.

use crate::{Calculator, IterationState};
use mandelbatch_core::{CalcError, GridModel, IterationMatrix, Viewport};

/// Computes the grid one full row at a time.
///
/// A row stops iterating as soon as all of its pixels have escaped, or when
/// the limit is reached.
#[derive(Debug)]
pub struct LineCalculator {
    state: IterationState,
}

impl LineCalculator {
    pub const NAME: &'static str = "line";

    /// Calculator over the default viewport.
    pub fn new(grid_size: u32, limit: u32) -> Result<Self, CalcError> {
        Self::from_grid(GridModel::new(grid_size, limit)?)
    }

    pub fn with_viewport(
        grid_size: u32,
        limit: u32,
        viewport: Viewport,
    ) -> Result<Self, CalcError> {
        Self::from_grid(GridModel::with_viewport(grid_size, limit, viewport)?)
    }

    pub fn from_grid(grid: GridModel) -> Result<Self, CalcError> {
        Ok(Self {
            state: IterationState::new(grid)?,
        })
    }
}

impl Calculator for LineCalculator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn grid(&self) -> &GridModel {
        self.state.grid()
    }

    fn run(mut self) -> IterationMatrix {
        let grid = *self.state.grid();
        let limit = grid.limit();

        for row in 0..grid.height() {
            let iterations = self.state.row(row).run_to_completion(limit);
            log::trace!("Row {row} settled after {iterations} iterations");
        }

        self.state.into_matrix()
    }

    fn run_boxed(self: Box<Self>) -> IterationMatrix {
        (*self).run()
    }
}
