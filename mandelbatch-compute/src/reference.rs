use crate::lanes::ESCAPE_RADIUS_SQ;
use crate::Calculator;
use mandelbatch_core::{CalcError, GridModel, IterationMatrix, Viewport};

/// Straightforward per-pixel escape-time calculator.
///
/// Uses the same f32 arithmetic in the same order as the lock-step kernel, so
/// its output is the oracle the vectorized strategies are checked against.
#[derive(Debug)]
pub struct ReferenceCalculator {
    grid: GridModel,
}

impl ReferenceCalculator {
    pub const NAME: &'static str = "reference";

    pub fn new(grid_size: u32, limit: u32) -> Result<Self, CalcError> {
        Ok(Self::from_grid(GridModel::new(grid_size, limit)?))
    }

    pub fn with_viewport(
        grid_size: u32,
        limit: u32,
        viewport: Viewport,
    ) -> Result<Self, CalcError> {
        Ok(Self::from_grid(GridModel::with_viewport(
            grid_size, limit, viewport,
        )?))
    }

    pub fn from_grid(grid: GridModel) -> Self {
        Self { grid }
    }

    /// Iteration at which the orbit of `c` first exceeds the escape radius.
    ///
    /// The orbit starts at z₀ = c; returns `limit` for points that stay bounded.
    pub fn compute_point(&self, c_re: f32, c_im: f32) -> u32 {
        let mut re = c_re;
        let mut im = c_im;

        for k in 0..self.grid.limit() {
            let r2 = re * re;
            let i2 = im * im;

            if r2 + i2 > ESCAPE_RADIUS_SQ {
                return k;
            }

            // z = z^2 + c
            im = 2.0 * re * im + c_im;
            re = r2 - i2 + c_re;
        }

        self.grid.limit()
    }
}

impl Calculator for ReferenceCalculator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn grid(&self) -> &GridModel {
        &self.grid
    }

    fn run(self) -> IterationMatrix {
        let counts = (0..self.grid.height())
            .flat_map(|i| {
                let calc = &self;
                (0..calc.grid.width()).map(move |j| {
                    let (c_re, c_im) = calc.grid.coordinate(i, j);
                    calc.compute_point(c_re, c_im)
                })
            })
            .collect();

        IterationMatrix::new(
            self.grid.width(),
            self.grid.height(),
            self.grid.limit(),
            counts,
        )
    }

    fn run_boxed(self: Box<Self>) -> IterationMatrix {
        (*self).run()
    }
}
