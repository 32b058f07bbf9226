//! Optimization of weight nodes against a scalar cost node.
//!
//! This module provides the `Optimizer` trait, the `Objective` describing
//! which nodes are weights, static inputs and cost, plain batch
//! `GradientDescent`, and helpers to draw initial weights.

pub mod gradient_descent;
pub mod init;
pub mod objective;
pub mod optimizer_trait;

pub use gradient_descent::{grad_descent, GradientDescent, GradientDescentConfig, Optimized, Termination};
pub use objective::Objective;
pub use optimizer_trait::Optimizer;

/// Values of the static inputs for one forward pass, in the objective's order.
pub type Sample = Vec<f64>;

/// Samples whose derivatives are accumulated into a single update.
pub type Batch = Vec<Sample>;

/// Outcome of a single optimizer step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Zero-based index of this step.
    pub iteration: usize,
    /// Index of the batch the step consumed.
    pub batch_index: usize,
    /// Mean cost over the batch, before the update.
    pub cost: f64,
    /// Derivative of the cost per weight, summed over the batch.
    pub gradient: Vec<f64>,
    pub gradient_norm: f64,
}
