//! Data plumbing for feeding samples to the gradient-descent optimizer of
//! `compgraph-core`: datasets of static-input rows, index samplers and the
//! batch list consumed by `grad_descent`.

pub mod batch_set;
pub mod datasets;
pub mod samplers;

pub use batch_set::BatchSet;
pub use datasets::{Dataset, SampleDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
