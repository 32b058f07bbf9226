use crate::chain::DerivChain;
use crate::coordinate::Coordinate;
use crate::error::CompGraphError;
use crate::graph::Graph;

impl Graph {
    /// Finds a path from `denominator` up to `numerator`.
    ///
    /// Depth-first search backwards from the numerator over parent links;
    /// parents are explored in parent-list order and the first path reaching
    /// the denominator is returned, denominator first. `Ok(None)` means the
    /// numerator does not depend on the denominator at all: its derivative is
    /// zero.
    ///
    /// Only one path is returned. If the numerator depends on the denominator
    /// through several reconverging paths, the product along this chain is
    /// not the full derivative; use [`Graph::total_deriv`] for that case.
    pub fn deriv_chain(
        &self,
        denominator: Coordinate,
        numerator: Coordinate,
    ) -> Result<Option<DerivChain>, CompGraphError> {
        self.check(denominator)?;
        self.check(numerator)?;
        Ok(self.search_paths(denominator, numerator, true).pop())
    }

    /// Every path from `denominator` to `numerator`, in search order.
    ///
    /// The number of paths can grow exponentially with depth on densely
    /// connected graphs.
    pub fn deriv_chains(
        &self,
        denominator: Coordinate,
        numerator: Coordinate,
    ) -> Result<Vec<DerivChain>, CompGraphError> {
        self.check(denominator)?;
        self.check(numerator)?;
        Ok(self.search_paths(denominator, numerator, false))
    }

    /// Chain-rule product of the partials along `chain`.
    ///
    /// Uses node values from the latest forward pass, so the graph must have
    /// been run beforehand. Every consecutive pair must be an edge of this
    /// graph; this is checked before any factor is computed. A single-node
    /// chain has derivative 1.
    pub fn deriv(&self, chain: &DerivChain) -> Result<f64, CompGraphError> {
        let factors = chain
            .edges()
            .map(|(parent, child)| self.edge_partial(parent, child))
            .collect::<Result<Vec<f64>, CompGraphError>>()?;
        Ok(factors.into_iter().fold(1.0, |acc, factor| acc * factor))
    }

    /// Derivative of `numerator` with respect to `denominator` summed over
    /// every connecting path (multivariate chain rule). Zero if unrelated.
    pub fn total_deriv(&self, denominator: Coordinate, numerator: Coordinate) -> Result<f64, CompGraphError> {
        let mut total = 0.0;
        for chain in self.deriv_chains(denominator, numerator)? {
            total += self.deriv(&chain)?;
        }
        Ok(total)
    }

    fn edge_partial(&self, parent: Coordinate, child: Coordinate) -> Result<f64, CompGraphError> {
        self.check(parent)?;
        let node = self.node(child)?;
        let position = node
            .parent_position(parent)
            .ok_or(CompGraphError::MissingEdge { parent, child })?;
        let operator = node
            .operator
            .ok_or(CompGraphError::UnsetNode { coordinate: child })?;
        Ok(operator.partial(self.node_ref(parent).value, node.value, position))
    }

    // Partial paths are stored numerator first; each expansion replaces the
    // frontier by one candidate per parent. Branches that drop to or below the
    // denominator's layer without hitting it cannot reach it and are pruned.
    fn search_paths(&self, denominator: Coordinate, numerator: Coordinate, first_only: bool) -> Vec<DerivChain> {
        let mut found = Vec::new();
        let mut stack: Vec<Vec<Coordinate>> = vec![vec![numerator]];

        while let Some(path) = stack.pop() {
            let frontier = match path.last() {
                Some(&frontier) => frontier,
                None => continue,
            };
            if frontier == denominator {
                found.push(DerivChain::from_reversed_path(path));
                if first_only {
                    break;
                }
                continue;
            }
            // reversed so that the first parent is popped first
            for &parent in self.node_ref(frontier).parents.iter().rev() {
                if parent.layer > denominator.layer || parent == denominator {
                    let mut extended = path.clone();
                    extended.push(parent);
                    stack.push(extended);
                }
            }
        }

        if found.is_empty() {
            log::debug!("No derivative path from {} to {}", denominator, numerator);
        }
        found
    }
}

#[cfg(test)]
#[path = "deriv_methods_test.rs"]
mod tests;
