use crate::chain::DerivChain;
use crate::coordinate::Coordinate;
use crate::error::CompGraphError;
use crate::graph::Graph;
use std::collections::HashSet;

/// What gradient descent optimizes: which nodes are adjustable, which are
/// fed from the data, which node is the cost, and the derivative chain from
/// each weight to the cost.
///
/// A weight whose chain is `None` does not influence the cost; its
/// derivative is taken as zero and it is never moved.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    weights: Vec<Coordinate>,
    static_inputs: Vec<Coordinate>,
    cost: Coordinate,
    chains: Vec<Option<DerivChain>>,
}

impl Objective {
    /// Creates an objective from explicitly supplied chains, one per weight.
    ///
    /// Each chain must start at its weight and end at `cost`. A coordinate
    /// may appear only once across `weights` and `static_inputs`.
    pub fn new(
        weights: Vec<Coordinate>,
        static_inputs: Vec<Coordinate>,
        cost: Coordinate,
        chains: Vec<Option<DerivChain>>,
    ) -> Result<Self, CompGraphError> {
        if chains.len() != weights.len() {
            return Err(CompGraphError::LengthMismatch {
                expected: weights.len(),
                actual: chains.len(),
                operation: "objective chains".to_string(),
            });
        }
        let mut seen = HashSet::with_capacity(weights.len() + static_inputs.len());
        if let Some(&coordinate) = weights.iter().chain(&static_inputs).find(|c| !seen.insert(**c)) {
            return Err(CompGraphError::DuplicateCoordinate { coordinate });
        }
        for (weight, chain) in weights.iter().zip(&chains) {
            if let Some(chain) = chain {
                if chain.denominator() != *weight {
                    return Err(CompGraphError::ChainEndpointMismatch {
                        expected: *weight,
                        actual: chain.denominator(),
                    });
                }
                if chain.numerator() != cost {
                    return Err(CompGraphError::ChainEndpointMismatch {
                        expected: cost,
                        actual: chain.numerator(),
                    });
                }
            }
        }
        Ok(Objective {
            weights,
            static_inputs,
            cost,
            chains,
        })
    }

    /// Creates an objective whose chains are found with [`Graph::deriv_chain`].
    pub fn discover(
        graph: &Graph,
        weights: Vec<Coordinate>,
        static_inputs: Vec<Coordinate>,
        cost: Coordinate,
    ) -> Result<Self, CompGraphError> {
        let mut chains = Vec::with_capacity(weights.len());
        for &weight in &weights {
            let chain = graph.deriv_chain(weight, cost)?;
            if chain.is_none() {
                log::warn!("Weight {} has no path to cost {}; it will not be updated", weight, cost);
            }
            chains.push(chain);
        }
        Objective::new(weights, static_inputs, cost, chains)
    }

    /// Checks the objective against `graph`: every coordinate exists, weights
    /// and static inputs are `Input` nodes, and every chain edge is joined.
    pub fn validate(&self, graph: &Graph) -> Result<(), CompGraphError> {
        for &coordinate in self.weights.iter().chain(&self.static_inputs) {
            if !graph.operator(coordinate)?.map_or(false, |op| op.is_input()) {
                return Err(CompGraphError::NotAnInput {
                    coordinate,
                    operation: "gradient descent".to_string(),
                });
            }
        }
        graph.node(self.cost)?;
        for chain in self.chains.iter().flatten() {
            for (parent, child) in chain.edges() {
                if !graph.is_joined(parent, child)? {
                    return Err(CompGraphError::MissingEdge { parent, child });
                }
            }
        }
        Ok(())
    }

    pub fn weights(&self) -> &[Coordinate] {
        &self.weights
    }

    pub fn static_inputs(&self) -> &[Coordinate] {
        &self.static_inputs
    }

    pub fn cost(&self) -> Coordinate {
        self.cost
    }

    pub fn chains(&self) -> &[Option<DerivChain>] {
        &self.chains
    }
}
