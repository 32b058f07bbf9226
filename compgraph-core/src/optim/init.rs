use crate::error::CompGraphError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// `count` copies of `value`.
pub fn constant(count: usize, value: f64) -> Vec<f64> {
    vec![value; count]
}

/// Draws `count` weights uniformly from `[low, high)`.
pub fn uniform<R: Rng>(count: usize, low: f64, high: f64, rng: &mut R) -> Result<Vec<f64>, CompGraphError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(CompGraphError::InvalidConfig(format!(
            "uniform initialisation needs finite bounds with low < high, got [{}, {})",
            low, high
        )));
    }
    let distribution = Uniform::new(low, high);
    Ok((0..count).map(|_| distribution.sample(rng)).collect())
}

/// Draws `count` weights from a normal distribution.
///
/// `mean` must be finite and `std_dev` finite and non-negative.
pub fn normal<R: Rng>(count: usize, mean: f64, std_dev: f64, rng: &mut R) -> Result<Vec<f64>, CompGraphError> {
    if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
        return Err(CompGraphError::InvalidConfig(format!(
            "normal initialisation needs a finite mean and a finite non-negative std dev, got mean {} std dev {}",
            mean, std_dev
        )));
    }
    let distribution = Normal::new(mean, std_dev)
        .map_err(|e| CompGraphError::InvalidConfig(format!("normal initialisation: {}", e)))?;
    Ok((0..count).map(|_| distribution.sample(rng)).collect())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
