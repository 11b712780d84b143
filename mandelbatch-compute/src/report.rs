use crate::{get_calculator_info, Calculator};
use mandelbatch_core::IterationMatrix;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Summary of one calculator run, suitable for benchmark logs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub calculator: String,
    /// Human-readable strategy name from the registry
    pub display_name: String,
    pub grid_size: u32,
    pub limit: u32,
    /// Pixels that escaped before the limit
    pub escaped_pixels: usize,
    pub elapsed_ms: f64,
}

/// Run a boxed calculator and time it.
pub fn run_timed(calculator: Box<dyn Calculator>) -> (IterationMatrix, RunReport) {
    let name = calculator.name();
    let grid = *calculator.grid();

    let start = Instant::now();
    let matrix = calculator.run_boxed();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let display_name = get_calculator_info(name).map_or(name, |info| info.display_name);

    let report = RunReport {
        calculator: name.to_string(),
        display_name: display_name.to_string(),
        grid_size: grid.grid_size(),
        limit: grid.limit(),
        escaped_pixels: matrix.escaped_count(),
        elapsed_ms,
    };
    log::info!(
        "{}: {}x{} grid, limit {}, {} escaped in {:.1}ms",
        display_name,
        report.grid_size,
        report.grid_size,
        report.limit,
        report.escaped_pixels,
        elapsed_ms
    );

    (matrix, report)
}
