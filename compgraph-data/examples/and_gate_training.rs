//! Trains the two-weight sigmoid neuron of the AND-gate graph on the AND
//! truth table and prints the learned weights and outputs.

use compgraph_core::optim::{grad_descent, init, GradientDescentConfig, Objective};
use compgraph_core::{CompGraphError, Coordinate, Graph, Operator};
use compgraph_data::{BatchSet, Dataset, RandomSampler, SampleDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn c(layer: usize, index: usize) -> Coordinate {
    Coordinate::new(layer, index)
}

fn build_graph() -> Result<Graph, CompGraphError> {
    let mut graph = Graph::new(vec![4, 2, 1, 2, 1, 1])?;
    // weights w0 w1, samples x0 x1
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

fn main() -> Result<(), CompGraphError> {
    let mut graph = build_graph()?;
    let objective = Objective::discover(
        &graph,
        vec![c(0, 0), c(0, 1)],
        vec![c(0, 2), c(0, 3), c(3, 1)],
        c(5, 0),
    )?;

    let dataset = SampleDataset::new(vec![
        vec![0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![1.0, 0.0, 0.0],
        vec![1.0, 1.0, 1.0],
    ])?;
    let batches = BatchSet::from_dataset(&dataset, 2, &RandomSampler::new(42), false)?;

    let mut rng = StdRng::seed_from_u64(42);
    let initial = init::uniform(2, 0.0, 1.0, &mut rng)?;
    println!("Initial weights: {:?}", initial);

    let config = GradientDescentConfig::default();
    let result = grad_descent(&mut graph, &objective, &initial, batches.batches(), config)?;
    println!(
        "Finished after {} iteration(s) ({:?}), weights {:?}",
        result.iterations, result.termination, result.weights
    );

    for index in 0..dataset.len() {
        let sample = dataset.get(index)?;
        let mut inputs = result.weights.clone();
        inputs.extend_from_slice(&sample);
        graph.exec(&inputs)?;
        println!(
            "x = ({}, {}) target {} -> sigmoid {:.4}, cost {:.4}",
            sample[0],
            sample[1],
            sample[2],
            graph.value(c(3, 0))?,
            graph.value(c(5, 0))?
        );
    }
    Ok(())
}
