use std::fmt;

/// Address of a node inside a [`Graph`](crate::graph::Graph).
///
/// Graphs are laid out in layers; a node lives at `index` within `layer`.
/// A coordinate is a plain value: it identifies a slot owned by the graph and
/// never keeps the node alive or borrows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub layer: usize,
    pub index: usize,
}

impl Coordinate {
    pub const fn new(layer: usize, index: usize) -> Self {
        Coordinate { layer, index }
    }

    /// Returns true if this coordinate addresses a slot of a graph with `shape`.
    pub fn is_valid_for(&self, shape: &[usize]) -> bool {
        self.layer < shape.len() && self.index < shape[self.layer]
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((layer, index): (usize, usize)) -> Self {
        Coordinate::new(layer, index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.layer, self.index)
    }
}
