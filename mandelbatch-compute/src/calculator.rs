use mandelbatch_core::{GridModel, IterationMatrix};

/// An escape-time calculator over a fixed grid.
///
/// Each calculator owns its iteration state and is single use: `run` consumes
/// it, so advanced iterates can never be fed into a second computation.
pub trait Calculator: Send {
    /// Registry id of the strategy.
    fn name(&self) -> &'static str;

    /// The grid being computed.
    fn grid(&self) -> &GridModel;

    /// Compute the iteration count of every pixel.
    fn run(self) -> IterationMatrix
    where
        Self: Sized;

    /// `run` for boxed calculators returned by the factory.
    fn run_boxed(self: Box<Self>) -> IterationMatrix;
}
