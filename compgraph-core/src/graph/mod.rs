//! The layered computational graph.
//!
//! A [`Graph`] owns every [`Node`] in a per-layer arena and is addressed
//! exclusively through [`Coordinate`]s. Edges point from a parent in a lower
//! layer to a child in a higher layer, so the graph is acyclic by
//! construction and a single layer-ordered sweep evaluates it.
//!
//! The methods are split across files:
//! - `topology_methods.rs`: `set`, `join`, `sever`, `is_joined` and inspection.
//! - `exec_methods.rs`: value access and forward execution.
//! - `deriv_methods.rs`: derivative-chain search and chain-rule evaluation.
//!
//! A graph is scratch state for a single actor: node values are overwritten
//! by every pass, so a graph must not be executed from two places at once.
//! Exclusive `&mut` access to the graph expresses that contract.

use crate::coordinate::Coordinate;
use crate::error::CompGraphError;
use crate::node::Node;

pub mod deriv_methods;
pub mod exec_methods;
pub mod topology_methods;

#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    shape: Vec<usize>,
    layers: Vec<Vec<Node>>,
    // Input and Output coordinates in registration order.
    inputs: Vec<Coordinate>,
    outputs: Vec<Coordinate>,
}

impl Graph {
    /// Creates a graph with `shape[l]` empty slots in layer `l`.
    ///
    /// Every slot must receive an operator through [`Graph::set`] before the
    /// graph can be executed.
    pub fn new(shape: Vec<usize>) -> Result<Self, CompGraphError> {
        if shape.is_empty() {
            return Err(CompGraphError::EmptyShape);
        }
        if let Some(layer) = shape.iter().position(|&size| size == 0) {
            return Err(CompGraphError::EmptyLayer { layer });
        }

        let layers = shape
            .iter()
            .enumerate()
            .map(|(layer, &size)| {
                (0..size)
                    .map(|index| Node::empty(Coordinate::new(layer, index)))
                    .collect()
            })
            .collect();

        Ok(Graph {
            shape,
            layers,
            inputs: Vec::new(),
            outputs: Vec::new(),
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn num_layers(&self) -> usize {
        self.shape.len()
    }

    /// Total number of node slots.
    pub fn len(&self) -> usize {
        self.shape.iter().sum()
    }

    /// Always false: [`Graph::new`] rejects empty shapes and empty layers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.is_valid_for(&self.shape)
    }

    pub fn node(&self, coordinate: Coordinate) -> Result<&Node, CompGraphError> {
        self.check(coordinate)?;
        Ok(&self.layers[coordinate.layer][coordinate.index])
    }

    /// Iterates over all nodes in layer-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.layers.iter().flatten()
    }

    /// Input coordinates in the order their operator was installed.
    /// This is the order [`Graph::exec`] expects its input values in.
    pub fn inputs(&self) -> &[Coordinate] {
        &self.inputs
    }

    /// Output coordinates in the order their operator was installed.
    pub fn outputs(&self) -> &[Coordinate] {
        &self.outputs
    }

    pub(crate) fn check(&self, coordinate: Coordinate) -> Result<(), CompGraphError> {
        if self.contains(coordinate) {
            Ok(())
        } else {
            Err(CompGraphError::CoordinateOutOfBounds {
                coordinate,
                shape: self.shape.clone(),
            })
        }
    }

    pub(crate) fn node_ref(&self, coordinate: Coordinate) -> &Node {
        &self.layers[coordinate.layer][coordinate.index]
    }

    pub(crate) fn node_mut(&mut self, coordinate: Coordinate) -> &mut Node {
        &mut self.layers[coordinate.layer][coordinate.index]
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
