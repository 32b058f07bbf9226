use crate::coordinate::Coordinate;
use crate::error::CompGraphError;
use crate::graph::Graph;
use crate::operator::Operator;

/// Two inputs multiplied together, squared, and forwarded to an output.
///
/// Layout: `(0,0)`, `(0,1)` inputs; `(1,0)` Mult; `(2,0)` Square; `(3,0)` Output.
pub(crate) fn mult_square_graph() -> Result<Graph, CompGraphError> {
    let mut graph = Graph::new(vec![2, 1, 1, 1])?;
    graph.set(Coordinate::new(0, 0), Operator::Input)?;
    graph.set(Coordinate::new(0, 1), Operator::Input)?;
    graph.set(Coordinate::new(1, 0), Operator::Mult)?;
    graph.set(Coordinate::new(2, 0), Operator::Square)?;
    graph.set(Coordinate::new(3, 0), Operator::Output)?;

    graph.join(Coordinate::new(0, 0), Coordinate::new(1, 0))?;
    graph.join(Coordinate::new(0, 1), Coordinate::new(1, 0))?;
    graph.join(Coordinate::new(1, 0), Coordinate::new(2, 0))?;
    graph.join(Coordinate::new(2, 0), Coordinate::new(3, 0))?;
    Ok(graph)
}

/// Single sigmoid neuron trained towards a target: `(sigmoid(w0*x0 + w1*x1) - t)^2`.
///
/// Inputs in registration order: `w0 (0,0)`, `w1 (0,1)`, `x0 (0,2)`, `x1 (0,3)`, `t (3,1)`.
/// The cost sits at `(5,0)`.
pub(crate) fn and_gate_graph() -> Result<Graph, CompGraphError> {
    let mut graph = Graph::new(vec![4, 2, 1, 2, 1, 1])?;
    for index in 0..4 {
        graph.set(Coordinate::new(0, index), Operator::Input)?;
    }
    graph.set(Coordinate::new(1, 0), Operator::Mult)?;
    graph.set(Coordinate::new(1, 1), Operator::Mult)?;
    graph.set(Coordinate::new(2, 0), Operator::Sum)?;
    graph.set(Coordinate::new(3, 0), Operator::Sigmoid)?;
    graph.set(Coordinate::new(3, 1), Operator::Input)?;
    graph.set(Coordinate::new(4, 0), Operator::Difference)?;
    graph.set(Coordinate::new(5, 0), Operator::Square)?;

    graph.join(Coordinate::new(0, 0), Coordinate::new(1, 0))?;
    graph.join(Coordinate::new(0, 2), Coordinate::new(1, 0))?;
    graph.join(Coordinate::new(0, 1), Coordinate::new(1, 1))?;
    graph.join(Coordinate::new(0, 3), Coordinate::new(1, 1))?;
    graph.join(Coordinate::new(1, 0), Coordinate::new(2, 0))?;
    graph.join(Coordinate::new(1, 1), Coordinate::new(2, 0))?;
    graph.join(Coordinate::new(2, 0), Coordinate::new(3, 0))?;
    graph.join(Coordinate::new(3, 0), Coordinate::new(4, 0))?;
    graph.join(Coordinate::new(3, 1), Coordinate::new(4, 0))?;
    graph.join(Coordinate::new(4, 0), Coordinate::new(5, 0))?;
    Ok(graph)
}
