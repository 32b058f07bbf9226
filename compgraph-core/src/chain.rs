use crate::coordinate::Coordinate;
use crate::error::CompGraphError;
use std::fmt;

/// A path through the graph along which the chain rule is evaluated.
///
/// The first coordinate is the denominator (the node being differentiated
/// with respect to), the last one is the numerator (the dependent node).
/// Layers strictly increase along the chain. Whether every consecutive pair
/// is actually an edge is a property of a particular graph and is checked
/// when the chain is evaluated by [`Graph::deriv`](crate::graph::Graph::deriv).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivChain {
    coordinates: Vec<Coordinate>,
}

impl DerivChain {
    /// Builds a chain from denominator-first coordinates.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self, CompGraphError> {
        if coordinates.is_empty() {
            return Err(CompGraphError::InvalidChain(
                "a chain needs at least one coordinate".to_string(),
            ));
        }
        if let Some(pair) = coordinates.windows(2).find(|w| w[0].layer >= w[1].layer) {
            return Err(CompGraphError::InvalidChain(format!(
                "layers must strictly increase, found {} followed by {}",
                pair[0], pair[1]
            )));
        }
        Ok(DerivChain { coordinates })
    }

    // Search results are well-formed by construction.
    pub(crate) fn from_reversed_path(mut path: Vec<Coordinate>) -> Self {
        path.reverse();
        DerivChain { coordinates: path }
    }

    pub fn denominator(&self) -> Coordinate {
        self.coordinates[0]
    }

    pub fn numerator(&self) -> Coordinate {
        self.coordinates[self.coordinates.len() - 1]
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of parent -> child edges, zero for a single-node chain.
    pub fn edge_count(&self) -> usize {
        self.coordinates.len() - 1
    }

    /// Consecutive `(parent, child)` pairs from denominator to numerator.
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.coordinates.windows(2).map(|w| (w[0], w[1]))
    }
}

impl<'a> IntoIterator for &'a DerivChain {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl fmt::Display for DerivChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_layer_order() {
        let chain = DerivChain::new(vec![(0, 1).into(), (1, 0).into(), (3, 0).into()]).unwrap();
        assert_eq!(chain.denominator(), Coordinate::new(0, 1));
        assert_eq!(chain.numerator(), Coordinate::new(3, 0));
        assert_eq!(chain.edge_count(), 2);
        assert_eq!(chain.to_string(), "(0, 1) -> (1, 0) -> (3, 0)");

        assert!(matches!(
            DerivChain::new(vec![(1, 0).into(), (1, 1).into()]),
            Err(CompGraphError::InvalidChain(_))
        ));
        assert!(matches!(
            DerivChain::new(vec![]),
            Err(CompGraphError::InvalidChain(_))
        ));
    }

    #[test]
    fn test_single_node_chain() {
        let chain = DerivChain::new(vec![Coordinate::new(2, 0)]).unwrap();
        assert_eq!(chain.denominator(), chain.numerator());
        assert_eq!(chain.edge_count(), 0);
        assert_eq!(chain.edges().count(), 0);
    }

    #[test]
    fn test_edges() {
        let chain = DerivChain::from_reversed_path(vec![(2, 0).into(), (1, 0).into(), (0, 0).into()]);
        let edges: Vec<_> = chain.edges().collect();
        assert_eq!(
            edges,
            vec![
                (Coordinate::new(0, 0), Coordinate::new(1, 0)),
                (Coordinate::new(1, 0), Coordinate::new(2, 0)),
            ]
        );
        assert_eq!((&chain).into_iter().count(), 3);
    }
}
