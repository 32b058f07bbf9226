use super::traits::Dataset;
use compgraph_core::optim::Sample;
use compgraph_core::CompGraphError;

/// Rows of static-input values, all of the same width.
///
/// One row supplies every static input of an objective for one forward pass,
/// so the width must equal the number of static inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDataset {
    rows: Vec<Sample>,
    width: usize,
}

impl SampleDataset {
    /// Creates a dataset from `rows`.
    ///
    /// # Errors
    ///
    /// Returns `CompGraphError::LengthMismatch` if a row differs in width
    /// from the first one.
    pub fn new(rows: Vec<Sample>) -> Result<Self, CompGraphError> {
        let width = rows.first().map_or(0, |row| row.len());
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(CompGraphError::LengthMismatch {
                expected: width,
                actual: row.len(),
                operation: format!("dataset row {}", index),
            });
        }
        Ok(SampleDataset { rows, width })
    }

    /// Width of every row, 0 for an empty dataset.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Sample] {
        &self.rows
    }
}

impl Dataset for SampleDataset {
    type Item = Sample;

    fn get(&self, index: usize) -> Result<Self::Item, CompGraphError> {
        self.rows
            .get(index)
            .cloned()
            .ok_or(CompGraphError::SampleOutOfBounds {
                index,
                len: self.rows.len(),
            })
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
#[path = "sample_dataset_test.rs"]
mod tests;
