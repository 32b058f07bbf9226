use crate::error::CompGraphError;
use crate::graph::Graph;
use super::objective::Objective;
use super::{Batch, StepReport};

/// Trait defining the common interface for optimizers over a [`Graph`].
///
/// An optimizer owns the current weight values and any iteration state; the
/// graph is only scratch space for forward passes. Two optimizers can
/// therefore run side by side on distinct graphs.
pub trait Optimizer {
    /// Performs a single optimization step on the batch selected for the
    /// current iteration.
    ///
    /// # Returns
    ///
    /// A [`StepReport`] describing the step, or a `CompGraphError` if the
    /// objective, the batch or the graph is inconsistent.
    fn step(
        &mut self,
        graph: &mut Graph,
        objective: &Objective,
        batches: &[Batch],
    ) -> Result<StepReport, CompGraphError>;

    /// Current weight values, in the order of the objective's weights.
    fn weights(&self) -> &[f64];

    /// Number of steps taken so far.
    fn iteration(&self) -> usize;
}
