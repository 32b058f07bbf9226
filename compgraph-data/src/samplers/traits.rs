use std::fmt::Debug;

/// Decides the order in which dataset indices are grouped into batches.
pub trait Sampler: Debug {
    /// Returns the indices to visit for a dataset of `dataset_len` samples.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices [`Sampler::iter`] yields for `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
