use crate::coordinate::Coordinate;
use crate::error::CompGraphError;
use crate::graph::Graph;
use crate::operator::Operator;

fn arity_violation(coordinate: Coordinate, operator: Operator, max: usize, actual: usize) -> CompGraphError {
    CompGraphError::ArityViolation {
        coordinate,
        operator: operator.to_string(),
        expected: format!("at most {}", max),
        actual,
    }
}

impl Graph {
    /// Installs `operator` at `coordinate`.
    ///
    /// Fails if the coordinate is out of bounds or if the node already has
    /// more parents than the operator accepts. Installing `Input` or `Output`
    /// registers the coordinate for [`Graph::exec`]; replacing it with
    /// another kind removes the registration.
    pub fn set(&mut self, coordinate: Coordinate, operator: Operator) -> Result<(), CompGraphError> {
        self.check(coordinate)?;
        let parent_count = self.node_ref(coordinate).parents.len();
        if let Some(max) = operator.max_parents() {
            if parent_count > max {
                return Err(arity_violation(coordinate, operator, max, parent_count));
            }
        }

        register(&mut self.inputs, coordinate, operator.is_input());
        register(&mut self.outputs, coordinate, operator.is_output());

        let node = self.node_mut(coordinate);
        node.operator = Some(operator);
        if let Operator::Constant(value) = operator {
            node.value = value;
        }
        log::debug!("Installed {} at {}", operator, coordinate);
        Ok(())
    }

    pub fn operator(&self, coordinate: Coordinate) -> Result<Option<Operator>, CompGraphError> {
        Ok(self.node(coordinate)?.operator)
    }

    pub fn parents(&self, coordinate: Coordinate) -> Result<&[Coordinate], CompGraphError> {
        Ok(self.node(coordinate)?.parents())
    }

    /// Coordinates of every node listing `coordinate` as a parent, in layer-major order.
    pub fn children(&self, coordinate: Coordinate) -> Result<Vec<Coordinate>, CompGraphError> {
        self.check(coordinate)?;
        Ok(self.layers[coordinate.layer + 1..]
            .iter()
            .flatten()
            .filter(|node| node.parents.contains(&coordinate))
            .map(|node| node.coordinate)
            .collect())
    }

    /// Adds the edge `parent -> child`.
    ///
    /// The parent must sit in a strictly lower layer than the child, the edge
    /// must not exist yet, and the child's operator must accept one more parent.
    pub fn join(&mut self, parent: Coordinate, child: Coordinate) -> Result<(), CompGraphError> {
        self.check(parent)?;
        self.check(child)?;
        if parent.layer >= child.layer {
            return Err(CompGraphError::LayerOrder { parent, child });
        }

        let node = self.node_ref(child);
        if node.parents.contains(&parent) {
            return Err(CompGraphError::DuplicateEdge { parent, child });
        }
        if let Some(operator) = node.operator {
            if let Some(max) = operator.max_parents() {
                if node.parents.len() >= max {
                    return Err(arity_violation(child, operator, max, node.parents.len() + 1));
                }
            }
        }

        self.node_mut(child).parents.push(parent);
        log::debug!("Joined {} -> {}", parent, child);
        Ok(())
    }

    /// Removes the edge `parent -> child`. Fails if the edge does not exist.
    pub fn sever(&mut self, parent: Coordinate, child: Coordinate) -> Result<(), CompGraphError> {
        self.check(parent)?;
        self.check(child)?;
        let position = self
            .node_ref(child)
            .parent_position(parent)
            .ok_or(CompGraphError::MissingEdge { parent, child })?;

        self.node_mut(child).parents.remove(position);
        log::debug!("Severed {} -> {}", parent, child);
        Ok(())
    }

    pub fn is_joined(&self, parent: Coordinate, child: Coordinate) -> Result<bool, CompGraphError> {
        self.check(parent)?;
        Ok(self.node(child)?.parents.contains(&parent))
    }
}

// Keeps `registry` in sync with whether `coordinate` currently holds the registered kind.
fn register(registry: &mut Vec<Coordinate>, coordinate: Coordinate, is_kind: bool) {
    let position = registry.iter().position(|c| *c == coordinate);
    match (is_kind, position) {
        (true, None) => registry.push(coordinate),
        (false, Some(position)) => {
            registry.remove(position);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "topology_methods_test.rs"]
mod tests;
