use compgraph_core::{CompGraphError, Coordinate, Graph, Operator};

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn c(layer: usize, index: usize) -> Coordinate {
    Coordinate::new(layer, index)
}

/// `(sigmoid(w0*x0 + w1*x1) - t)^2` with weights at `(0,0)`, `(0,1)`,
/// samples at `(0,2)`, `(0,3)`, target at `(3,1)` and the cost at `(5,0)`.
#[allow(dead_code)]
pub(crate) fn and_gate() -> Result<Graph, CompGraphError> {
    let mut graph = Graph::new(vec![4, 2, 1, 2, 1, 1])?;
    for index in 0..4 {
        graph.set(c(0, index), Operator::Input)?;
    }
    graph.set(c(1, 0), Operator::Mult)?;
    graph.set(c(1, 1), Operator::Mult)?;
    graph.set(c(2, 0), Operator::Sum)?;
    graph.set(c(3, 0), Operator::Sigmoid)?;
    graph.set(c(3, 1), Operator::Input)?;
    graph.set(c(4, 0), Operator::Difference)?;
    graph.set(c(5, 0), Operator::Square)?;

    for (parent, child) in [
        (c(0, 0), c(1, 0)),
        (c(0, 2), c(1, 0)),
        (c(0, 1), c(1, 1)),
        (c(0, 3), c(1, 1)),
        (c(1, 0), c(2, 0)),
        (c(1, 1), c(2, 0)),
        (c(2, 0), c(3, 0)),
        (c(3, 0), c(4, 0)),
        (c(3, 1), c(4, 0)),
        (c(4, 0), c(5, 0)),
    ] {
        graph.join(parent, child)?;
    }
    Ok(graph)
}

/// Fully connected layered graph of Sum nodes fed by `width` inputs.
#[allow(dead_code)]
pub(crate) fn dense_sum_graph(width: usize, depth: usize) -> Result<Graph, CompGraphError> {
    let mut shape = vec![width; depth];
    shape.push(1);
    let mut graph = Graph::new(shape)?;
    for index in 0..width {
        graph.set(c(0, index), Operator::Input)?;
    }
    for layer in 1..depth {
        for index in 0..width {
            graph.set(c(layer, index), Operator::Sum)?;
            for parent in 0..width {
                graph.join(c(layer - 1, parent), c(layer, index))?;
            }
        }
    }
    graph.set(c(depth, 0), Operator::Output)?;
    graph.join(c(depth - 1, 0), c(depth, 0))?;
    Ok(graph)
}
