pub mod aligned_buffer;
pub mod batch;
pub mod calculator;
pub mod iteration_state;
pub mod lanes;
pub mod line;
pub mod reference;
pub mod registry;
pub mod report;

pub use aligned_buffer::{AlignedBuffer, ALIGNMENT};
pub use batch::BatchCalculator;
pub use calculator::Calculator;
pub use iteration_state::IterationState;
pub use lanes::{Segment, ESCAPE_RADIUS_SQ, LANES};
pub use line::LineCalculator;
pub use reference::ReferenceCalculator;
pub use registry::{
    create_calculator, create_calculator_by_id, get_calculator_info, CalculatorInfo, CALCULATORS,
};
pub use report::{run_timed, RunReport};

// Re-export core types for convenience
pub use mandelbatch_core::*;
