use crate::coordinate::Coordinate;
use crate::error::CompGraphError;
use crate::graph::Graph;
use crate::node::Node;
use crate::operator::Operator;

impl Graph {
    pub fn value(&self, coordinate: Coordinate) -> Result<f64, CompGraphError> {
        Ok(self.node(coordinate)?.value)
    }

    /// Overwrites the value at `coordinate`.
    ///
    /// Only the values of `Input` nodes survive a forward pass; every other
    /// node is recomputed from its parents.
    pub fn set_value(&mut self, coordinate: Coordinate, value: f64) -> Result<(), CompGraphError> {
        self.check(coordinate)?;
        self.node_mut(coordinate).value = value;
        Ok(())
    }

    /// Reads the values at `coordinates`, in order.
    pub fn read(&self, coordinates: &[Coordinate]) -> Result<Vec<f64>, CompGraphError> {
        coordinates.iter().map(|&c| self.value(c)).collect()
    }

    /// Writes `values[i]` to `coordinates[i]`. Nothing is written if any
    /// coordinate is invalid or the lengths differ.
    pub fn write(&mut self, coordinates: &[Coordinate], values: &[f64]) -> Result<(), CompGraphError> {
        if coordinates.len() != values.len() {
            return Err(CompGraphError::LengthMismatch {
                expected: coordinates.len(),
                actual: values.len(),
                operation: "write".to_string(),
            });
        }
        for &coordinate in coordinates {
            self.check(coordinate)?;
        }
        for (&coordinate, &value) in coordinates.iter().zip(values) {
            self.node_mut(coordinate).value = value;
        }
        Ok(())
    }

    /// Sets every node value to zero.
    pub fn reset(&mut self) {
        for node in self.layers.iter_mut().flatten() {
            node.value = 0.0;
        }
    }

    /// Checks that the graph can be executed: every slot has an operator and
    /// every `Output` has exactly one parent.
    pub fn validate(&self) -> Result<(), CompGraphError> {
        for node in self.nodes() {
            match node.operator {
                None => {
                    return Err(CompGraphError::UnsetNode {
                        coordinate: node.coordinate,
                    })
                }
                Some(operator @ Operator::Output) if node.parents.len() != 1 => {
                    return Err(CompGraphError::ArityViolation {
                        coordinate: node.coordinate,
                        operator: operator.to_string(),
                        expected: "exactly 1".to_string(),
                        actual: node.parents.len(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Forward pass over the values currently stored in the graph.
    ///
    /// Input nodes keep whatever was written to them; every other node is
    /// recomputed layer by layer. The graph is validated first and left
    /// untouched if validation fails.
    pub fn run(&mut self) -> Result<(), CompGraphError> {
        self.validate()?;
        self.forward();
        Ok(())
    }

    /// Writes `inputs` to the Input nodes (in registration order), runs a
    /// forward pass and returns the Output values (in registration order).
    pub fn exec(&mut self, inputs: &[f64]) -> Result<Vec<f64>, CompGraphError> {
        if inputs.len() != self.inputs.len() {
            return Err(CompGraphError::InputCountMismatch {
                expected: self.inputs.len(),
                actual: inputs.len(),
            });
        }
        self.validate()?;

        for (i, &value) in inputs.iter().enumerate() {
            let coordinate = self.inputs[i];
            self.node_mut(coordinate).value = value;
        }
        self.forward();

        Ok(self
            .outputs
            .iter()
            .map(|&coordinate| self.node_ref(coordinate).value)
            .collect())
    }

    // Nodes within a layer only read from earlier layers, so each layer can
    // be updated in place against an immutable view of the ones below it.
    fn forward(&mut self) {
        log::trace!("Forward pass over {} nodes", self.len());
        for layer in 0..self.layers.len() {
            let (earlier, rest) = self.layers.split_at_mut(layer);
            for node in rest[0].iter_mut() {
                if let Some(operator) = node.operator {
                    node.value = evaluate(operator, &node.parents, earlier, node.value);
                }
            }
        }
    }
}

fn evaluate(operator: Operator, parents: &[Coordinate], earlier: &[Vec<Node>], current: f64) -> f64 {
    let mut acc = current;
    operator.identity(&mut acc);
    for (position, parent) in parents.iter().enumerate() {
        operator.combine(&mut acc, earlier[parent.layer][parent.index].value, position);
    }
    operator.finalize(&mut acc);
    acc
}

#[cfg(test)]
#[path = "exec_methods_test.rs"]
mod tests;
