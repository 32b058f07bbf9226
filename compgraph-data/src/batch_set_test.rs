use super::*;
use crate::datasets::SampleDataset;
use crate::samplers::{RandomSampler, SequentialSampler};

fn dataset(len: usize) -> SampleDataset {
    SampleDataset::new((0..len).map(|i| vec![i as f64]).collect()).expect("equal widths")
}

#[test]
fn test_batch_set_keeps_partial_last_batch() -> Result<(), CompGraphError> {
    let batches = BatchSet::from_dataset(&dataset(5), 2, &SequentialSampler::new(), false)?;
    assert_eq!(batches.len(), 3);
    assert_eq!(batches.batches()[2], vec![vec![4.0]]);
    let owned = batches.clone().into_batches();
    assert_eq!(owned.as_slice(), batches.batches());
    Ok(())
}

#[test]
fn test_batch_set_drop_last() -> Result<(), CompGraphError> {
    let batches = BatchSet::from_dataset(&dataset(5), 2, &SequentialSampler::new(), true)?;
    assert_eq!(batches.len(), 2);
    assert_eq!(
        batches.batches(),
        &[vec![vec![0.0], vec![1.0]], vec![vec![2.0], vec![3.0]]]
    );
    Ok(())
}

#[test]
fn test_batch_set_iteration_wraps() -> Result<(), CompGraphError> {
    let batches = BatchSet::from_dataset(&dataset(3), 1, &SequentialSampler::new(), false)?;
    let visited: Vec<usize> = batches.cycle().take(7).map(|(index, _)| index).collect();
    assert_eq!(visited, vec![0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(batches.batch_for_iteration(4), &vec![vec![1.0]]);
    Ok(())
}

#[test]
fn test_batch_set_random_sampler_covers_every_sample() -> Result<(), CompGraphError> {
    let batches = BatchSet::from_dataset(&dataset(6), 4, &RandomSampler::new(3), false)?;
    let mut seen: Vec<f64> = batches.batches().iter().flatten().map(|s| s[0]).collect();
    seen.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
    assert_eq!(seen, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    Ok(())
}

#[test]
fn test_batch_set_errors() {
    assert_eq!(
        BatchSet::from_dataset(&dataset(3), 0, &SequentialSampler::new(), false),
        Err(CompGraphError::ZeroBatchSize)
    );
    assert_eq!(
        BatchSet::from_dataset(&dataset(1), 2, &SequentialSampler::new(), true),
        Err(CompGraphError::NoBatches)
    );
    assert_eq!(
        BatchSet::from_dataset(&dataset(0), 2, &SequentialSampler::new(), false),
        Err(CompGraphError::NoBatches)
    );
    assert_eq!(
        BatchSet::new(vec![vec![vec![1.0]], vec![]]),
        Err(CompGraphError::EmptyBatch { index: 1 })
    );
}
