pub mod sample_dataset;
pub mod traits;

pub use sample_dataset::SampleDataset;
pub use traits::Dataset;
