use compgraph_core::CompGraphError;

/// A collection of samples addressed by index.
pub trait Dataset {
    /// The type of a single sample.
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CompGraphError::SampleOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, CompGraphError>;

    /// Returns the number of samples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
