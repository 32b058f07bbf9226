//! Layered scalar computational graphs.
//!
//! A [`Graph`] is a fixed number of layers of scalar nodes, each node applying
//! an [`Operator`] to parents from lower layers. On top of forward execution
//! the crate provides derivative chains ([`DerivChain`]) evaluated with the
//! chain rule, and batch gradient descent over designated weight nodes
//! ([`optim`]).

pub mod chain;
pub mod coordinate;
pub mod deriv_check;
pub mod graph;
pub mod node;
pub mod operator;
pub mod optim;
pub(crate) mod utils;

pub mod error;

pub use chain::DerivChain;
pub use coordinate::Coordinate;
pub use error::CompGraphError;
pub use graph::Graph;
pub use node::Node;
pub use operator::Operator;
