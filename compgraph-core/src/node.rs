use crate::coordinate::Coordinate;
use crate::operator::Operator;

/// Storage slot of a [`Graph`](crate::graph::Graph).
///
/// Parents are stored as coordinates rather than references; the graph
/// resolves them on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) coordinate: Coordinate,
    pub(crate) value: f64,
    pub(crate) operator: Option<Operator>,
    pub(crate) parents: Vec<Coordinate>,
}

impl Node {
    pub(crate) fn empty(coordinate: Coordinate) -> Self {
        Node {
            coordinate,
            value: 0.0,
            operator: None,
            parents: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Current value. Transient: overwritten by every forward pass.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The installed operator, or `None` if the slot has not been set yet.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Parent coordinates in the order they were joined.
    pub fn parents(&self) -> &[Coordinate] {
        &self.parents
    }

    /// Index of `parent` in the parent list.
    pub fn parent_position(&self, parent: Coordinate) -> Option<usize> {
        self.parents.iter().position(|p| *p == parent)
    }
}
