use crate::chain::DerivChain;
use crate::error::CompGraphError;
use crate::graph::Graph;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for derivative checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DerivCheckError {
    #[error("Derivative check failed along {chain}: analytical {analytical:?} != numerical {numerical:?} (difference {difference:?})")]
    DerivativeMismatch {
        chain: String,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
    #[error("Numerical derivative is NaN or infinite along {chain}. Numerator+: {plus:?}, Numerator-: {minus:?}")]
    NumericalNaNOrInfinite { chain: String, plus: f64, minus: f64 },
    #[error("Analytical derivative is NaN or infinite along {chain}: {value:?}")]
    AnalyticalNaNOrInfinite { chain: String, value: f64 },
    #[error("Epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),
    #[error("Graph error during derivative check: {0}")]
    Graph(#[from] CompGraphError),
}

/// Result of a successful [`check_deriv`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivCheck {
    pub analytical: f64,
    pub numerical: f64,
}

/// Compares the chain-rule derivative along `chain` with a central finite
/// difference of the numerator with respect to the denominator.
///
/// The denominator must be an `Input` node: it is nudged by `±epsilon` and the
/// graph is re-run for each side. Afterwards the original value is restored
/// and the graph is run once more, so node values end up as they were after a
/// plain forward pass.
///
/// On graphs where the numerator depends on the denominator through several
/// paths the single-chain product differs from the finite difference, and
/// the check reports a mismatch.
pub fn check_deriv(
    graph: &mut Graph,
    chain: &DerivChain,
    epsilon: f64,
    tolerance: f64,
) -> Result<DerivCheck, DerivCheckError> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(DerivCheckError::InvalidEpsilon(epsilon));
    }
    let denominator = chain.denominator();
    let numerator = chain.numerator();
    if !graph.operator(denominator)?.map_or(false, |op| op.is_input()) {
        return Err(CompGraphError::NotAnInput {
            coordinate: denominator,
            operation: "check_deriv".to_string(),
        }
        .into());
    }

    let original = graph.value(denominator)?;
    graph.run()?;
    let analytical = graph.deriv(chain)?;

    graph.set_value(denominator, original + epsilon)?;
    graph.run()?;
    let plus = graph.value(numerator)?;

    graph.set_value(denominator, original - epsilon)?;
    graph.run()?;
    let minus = graph.value(numerator)?;

    graph.set_value(denominator, original)?;
    graph.run()?;

    let numerical = (plus - minus) / (2.0 * epsilon);
    let label = chain.to_string();
    if !numerical.is_finite() {
        return Err(DerivCheckError::NumericalNaNOrInfinite { chain: label, plus, minus });
    }
    if !analytical.is_finite() {
        return Err(DerivCheckError::AnalyticalNaNOrInfinite {
            chain: label,
            value: analytical,
        });
    }

    if !relative_eq!(analytical, numerical, epsilon = tolerance, max_relative = tolerance) {
        return Err(DerivCheckError::DerivativeMismatch {
            chain: label,
            analytical,
            numerical,
            difference: (analytical - numerical).abs(),
        });
    }
    log::debug!("Derivative check passed along {}: {}", label, analytical);
    Ok(DerivCheck { analytical, numerical })
}

#[cfg(test)]
#[path = "deriv_check_test.rs"]
mod tests;
