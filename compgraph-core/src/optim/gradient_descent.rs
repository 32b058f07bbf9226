use crate::error::CompGraphError;
use crate::graph::Graph;
use crate::optim::objective::Objective;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{Batch, StepReport};

/// Hyper-parameters of [`GradientDescent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescentConfig {
    /// Step size applied to the accumulated batch derivative.
    pub learning_rate: f64,
    /// The run converges once the Euclidean norm of a step's gradient drops below this.
    pub tolerance: f64,
    /// Upper bound on the number of steps taken by one `minimize` call.
    pub max_iterations: usize,
}

impl GradientDescentConfig {
    pub fn new(learning_rate: f64, tolerance: f64, max_iterations: usize) -> Self {
        GradientDescentConfig {
            learning_rate,
            tolerance,
            max_iterations,
        }
    }

    pub fn validate(&self) -> Result<(), CompGraphError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(CompGraphError::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(CompGraphError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for GradientDescentConfig {
    fn default() -> Self {
        GradientDescentConfig::new(0.1, 1e-3, 10_000)
    }
}

/// Why a [`GradientDescent::minimize`] run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The gradient norm fell below the tolerance.
    Converged,
    /// The iteration cap was reached first. The weights are the last ones computed.
    MaxIterations,
}

/// Outcome of a [`GradientDescent::minimize`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimized {
    pub weights: Vec<f64>,
    /// Steps taken during this run.
    pub iterations: usize,
    pub termination: Termination,
    /// Report of the last step, `None` if no step was taken.
    pub last_step: Option<StepReport>,
}

impl Optimized {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Plain batch gradient descent.
///
/// Each step selects batch `k mod N` (where `k` is the step counter and `N`
/// the number of batches), runs the graph once per sample, sums the chain-rule
/// derivative of the cost with respect to every weight over the samples, and
/// applies `weight -= learning_rate * derivative`. There is no momentum,
/// decay or regularization.
///
/// The struct holds all mutable optimization state (weights and step
/// counter); the graph only receives the values for each forward pass.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    config: GradientDescentConfig,
    weights: Vec<f64>,
    iteration: usize,
}

impl GradientDescent {
    pub fn new(config: GradientDescentConfig, initial_weights: Vec<f64>) -> Result<Self, CompGraphError> {
        config.validate()?;
        Ok(GradientDescent {
            config,
            weights: initial_weights,
            iteration: 0,
        })
    }

    pub fn config(&self) -> &GradientDescentConfig {
        &self.config
    }

    /// Steps until the gradient norm is below the tolerance or
    /// `max_iterations` steps have been taken, then writes the final weights
    /// into the graph's weight nodes.
    ///
    /// Everything is validated before the first step. A run that hits the cap
    /// still returns `Ok`, with [`Termination::MaxIterations`].
    pub fn minimize(
        &mut self,
        graph: &mut Graph,
        objective: &Objective,
        batches: &[Batch],
    ) -> Result<Optimized, CompGraphError> {
        self.check_objective(graph, objective)?;
        check_batches(batches, objective)?;

        let mut iterations = 0;
        let mut last_step = None;
        let termination = loop {
            if iterations >= self.config.max_iterations {
                break Termination::MaxIterations;
            }
            let report = self.step_unchecked(graph, objective, batches)?;
            iterations += 1;
            log::debug!(
                "Iteration {}: batch {}, cost {:.6}, gradient norm {:.6}",
                report.iteration,
                report.batch_index,
                report.cost,
                report.gradient_norm
            );
            let converged = report.gradient_norm < self.config.tolerance;
            last_step = Some(report);
            if converged {
                break Termination::Converged;
            }
        };

        graph.write(objective.weights(), &self.weights)?;
        match termination {
            Termination::Converged => {
                log::info!("Gradient descent converged after {} iterations", iterations)
            }
            Termination::MaxIterations => log::warn!(
                "Gradient descent stopped at the iteration cap ({}) without converging",
                self.config.max_iterations
            ),
        }

        Ok(Optimized {
            weights: self.weights.clone(),
            iterations,
            termination,
            last_step,
        })
    }

    fn check_objective(&self, graph: &Graph, objective: &Objective) -> Result<(), CompGraphError> {
        if self.weights.len() != objective.weights().len() {
            return Err(CompGraphError::LengthMismatch {
                expected: objective.weights().len(),
                actual: self.weights.len(),
                operation: "initial weights".to_string(),
            });
        }
        objective.validate(graph)?;
        graph.validate()
    }

    fn step_unchecked(
        &mut self,
        graph: &mut Graph,
        objective: &Objective,
        batches: &[Batch],
    ) -> Result<StepReport, CompGraphError> {
        let batch_index = self.iteration % batches.len();
        let batch = &batches[batch_index];

        let mut gradient = vec![0.0; self.weights.len()];
        let mut cost_total = 0.0;
        for sample in batch {
            graph.write(objective.static_inputs(), sample)?;
            graph.write(objective.weights(), &self.weights)?;
            graph.run()?;
            cost_total += graph.value(objective.cost())?;

            for (slot, chain) in gradient.iter_mut().zip(objective.chains()) {
                if let Some(chain) = chain {
                    *slot += graph.deriv(chain)?;
                }
            }
        }

        if let Some((weight, &value)) = gradient.iter().enumerate().find(|(_, g)| !g.is_finite()) {
            return Err(CompGraphError::NonFiniteGradient {
                weight,
                iteration: self.iteration,
                value,
            });
        }

        let learning_rate = self.config.learning_rate;
        for (weight, derivative) in self.weights.iter_mut().zip(&gradient) {
            *weight -= learning_rate * derivative;
        }

        let gradient_norm = gradient.iter().map(|g| g * g).sum::<f64>().sqrt();
        let report = StepReport {
            iteration: self.iteration,
            batch_index,
            cost: cost_total / batch.len() as f64,
            gradient,
            gradient_norm,
        };
        self.iteration += 1;
        Ok(report)
    }
}

impl Optimizer for GradientDescent {
    fn step(
        &mut self,
        graph: &mut Graph,
        objective: &Objective,
        batches: &[Batch],
    ) -> Result<StepReport, CompGraphError> {
        self.check_objective(graph, objective)?;
        if batches.is_empty() {
            return Err(CompGraphError::NoBatches);
        }
        let batch_index = self.iteration % batches.len();
        check_batch(batch_index, &batches[batch_index], objective)?;
        self.step_unchecked(graph, objective, batches)
    }

    fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn iteration(&self) -> usize {
        self.iteration
    }
}

/// Runs [`GradientDescent`] from `initial_weights` and returns the result.
pub fn grad_descent(
    graph: &mut Graph,
    objective: &Objective,
    initial_weights: &[f64],
    batches: &[Batch],
    config: GradientDescentConfig,
) -> Result<Optimized, CompGraphError> {
    GradientDescent::new(config, initial_weights.to_vec())?.minimize(graph, objective, batches)
}

fn check_batches(batches: &[Batch], objective: &Objective) -> Result<(), CompGraphError> {
    if batches.is_empty() {
        return Err(CompGraphError::NoBatches);
    }
    for (index, batch) in batches.iter().enumerate() {
        check_batch(index, batch, objective)?;
    }
    Ok(())
}

fn check_batch(index: usize, batch: &Batch, objective: &Objective) -> Result<(), CompGraphError> {
    if batch.is_empty() {
        return Err(CompGraphError::EmptyBatch { index });
    }
    let width = objective.static_inputs().len();
    for (sample_index, sample) in batch.iter().enumerate() {
        if sample.len() != width {
            return Err(CompGraphError::LengthMismatch {
                expected: width,
                actual: sample.len(),
                operation: format!("batch {} sample {}", index, sample_index),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "gradient_descent_test.rs"]
mod tests;
