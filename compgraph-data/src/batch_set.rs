//! # BatchSet
//!
//! Groups the samples of a [`Dataset`] into the fixed batch list that
//! `grad_descent` cycles through.
//!
//! ```rust
//! use compgraph_data::{BatchSet, SampleDataset, SequentialSampler};
//!
//! let dataset = SampleDataset::new(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
//! let batches = BatchSet::from_dataset(&dataset, 2, &SequentialSampler::new(), false).unwrap();
//! assert_eq!(batches.len(), 2);
//! assert_eq!(batches.batch_for_iteration(2), &vec![vec![1.0], vec![2.0]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use compgraph_core::optim::{Batch, Sample};
use compgraph_core::CompGraphError;

/// A non-empty list of non-empty batches.
///
/// Batch `k mod N` is the one used at iteration `k`, matching the selection
/// rule of the gradient-descent optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSet {
    batches: Vec<Batch>,
}

impl BatchSet {
    /// Splits the samples visited by `sampler` into consecutive batches of
    /// `batch_size`. The last batch may be shorter unless `drop_last` is set,
    /// in which case it is discarded.
    ///
    /// # Errors
    ///
    /// - `CompGraphError::ZeroBatchSize` if `batch_size` is 0.
    /// - `CompGraphError::NoBatches` if no batch could be formed.
    /// - Any error returned by [`Dataset::get`].
    pub fn from_dataset<D, S>(
        dataset: &D,
        batch_size: usize,
        sampler: &S,
        drop_last: bool,
    ) -> Result<Self, CompGraphError>
    where
        D: Dataset<Item = Sample>,
        S: Sampler,
    {
        if batch_size == 0 {
            return Err(CompGraphError::ZeroBatchSize);
        }
        let mut indices = sampler.iter(dataset.len());
        let mut batches = Vec::with_capacity(sampler.len(dataset.len()).div_ceil(batch_size));
        loop {
            let mut batch = Vec::with_capacity(batch_size);
            for index in indices.by_ref().take(batch_size) {
                batch.push(dataset.get(index)?);
            }
            if batch.is_empty() || (drop_last && batch.len() < batch_size) {
                break;
            }
            batches.push(batch);
        }
        log::debug!(
            "Assembled {} batch(es) of up to {} sample(s) from {} sample(s)",
            batches.len(),
            batch_size,
            dataset.len()
        );
        BatchSet::new(batches)
    }

    /// Wraps an explicit batch list.
    ///
    /// # Errors
    ///
    /// `CompGraphError::NoBatches` for an empty list and
    /// `CompGraphError::EmptyBatch` for an empty batch.
    pub fn new(batches: Vec<Batch>) -> Result<Self, CompGraphError> {
        if batches.is_empty() {
            return Err(CompGraphError::NoBatches);
        }
        if let Some(index) = batches.iter().position(|batch| batch.is_empty()) {
            return Err(CompGraphError::EmptyBatch { index });
        }
        Ok(BatchSet { batches })
    }

    /// The batch list, ready for `grad_descent`.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Always false: a `BatchSet` holds at least one batch.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn batch_for_iteration(&self, iteration: usize) -> &Batch {
        &self.batches[iteration % self.batches.len()]
    }

    /// Endless iterator over `(batch_index, batch)` in optimizer order.
    pub fn cycle(&self) -> impl Iterator<Item = (usize, &Batch)> + '_ {
        self.batches.iter().enumerate().cycle()
    }

    pub fn into_batches(self) -> Vec<Batch> {
        self.batches
    }
}

#[cfg(test)]
#[path = "batch_set_test.rs"]
mod tests;
