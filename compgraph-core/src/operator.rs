use std::fmt;

/// The rule a node applies to its parents during a forward pass.
///
/// Evaluating a node is split into three steps so that the graph can drive
/// every operator the same way:
///
/// 1. [`identity`](Operator::identity) seeds the accumulator,
/// 2. [`combine`](Operator::combine) folds each parent value in parent-list order,
/// 3. [`finalize`](Operator::finalize) applies any post-processing (only `Sigmoid` has one).
///
/// [`partial`](Operator::partial) then gives \( \frac{\partial\,\text{node}}{\partial\,\text{parent}} \)
/// from the node's already computed value and the parent's value, which keeps
/// chain-rule evaluation to one lookup per edge.
///
/// `Input` and `Output` are not driven through these steps: an input keeps the
/// value the caller wrote, an output copies its single parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    /// Leaf node whose value is written by the caller.
    Input,
    /// Forwards the value of exactly one parent.
    Output,
    /// Leaf node with a fixed value.
    Constant(f64),
    /// Sum of all parents.
    Sum,
    /// Product of all parents.
    Mult,
    /// First parent minus every following parent.
    Difference,
    /// Square of the (single) parent.
    Square,
    /// Logistic function of the sum of all parents.
    Sigmoid,
    /// Product of every parent raised to the exponent.
    Power(f64),
}

impl Operator {
    /// Seeds `acc` with the operator's algebraic identity.
    ///
    /// `Input` and `Output` leave the accumulator untouched; `Constant` seeds its value.
    pub fn identity(&self, acc: &mut f64) {
        match self {
            Operator::Input | Operator::Output => {}
            Operator::Constant(value) => *acc = *value,
            Operator::Sum | Operator::Difference | Operator::Sigmoid => *acc = 0.0,
            Operator::Mult | Operator::Square | Operator::Power(_) => *acc = 1.0,
        }
    }

    /// Folds the value of the parent at `position` in the parent list into `acc`.
    pub fn combine(&self, acc: &mut f64, parent_value: f64, position: usize) {
        match self {
            Operator::Input | Operator::Constant(_) => {}
            Operator::Output => *acc = parent_value,
            Operator::Sum | Operator::Sigmoid => *acc += parent_value,
            Operator::Mult => *acc *= parent_value,
            Operator::Difference => {
                if position == 0 {
                    *acc += parent_value;
                } else {
                    *acc -= parent_value;
                }
            }
            Operator::Square => *acc *= parent_value * parent_value,
            Operator::Power(exponent) => *acc *= parent_value.powf(*exponent),
        }
    }

    /// Applies the post-combine step.
    pub fn finalize(&self, acc: &mut f64) {
        if let Operator::Sigmoid = self {
            *acc = sigmoid(*acc);
        }
    }

    /// Partial derivative of the node with respect to the parent at `position`.
    ///
    /// `node_value` must be the value computed by the latest forward pass.
    /// `Mult` and `Power` divide by the parent value: a zero parent yields a
    /// non-finite result, which is returned as is.
    pub fn partial(&self, parent_value: f64, node_value: f64, position: usize) -> f64 {
        match self {
            Operator::Input | Operator::Constant(_) => 0.0,
            Operator::Output | Operator::Sum => 1.0,
            Operator::Mult => node_value / parent_value,
            Operator::Difference => {
                if position == 0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Operator::Square => 2.0 * parent_value,
            Operator::Sigmoid => node_value * (1.0 - node_value),
            Operator::Power(exponent) => exponent * node_value / parent_value,
        }
    }

    /// Largest number of parents the operator accepts, if bounded.
    pub fn max_parents(&self) -> Option<usize> {
        match self {
            Operator::Input | Operator::Constant(_) => Some(0),
            Operator::Output => Some(1),
            _ => None,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Operator::Input)
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Operator::Output)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Input => "Input",
            Operator::Output => "Output",
            Operator::Constant(_) => "Constant",
            Operator::Sum => "Sum",
            Operator::Mult => "Mult",
            Operator::Difference => "Difference",
            Operator::Square => "Square",
            Operator::Sigmoid => "Sigmoid",
            Operator::Power(_) => "Power",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Constant(value) => write!(f, "Constant({})", value),
            Operator::Power(exponent) => write!(f, "Power({})", exponent),
            other => f.write_str(other.name()),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
#[path = "operator_test.rs"]
mod tests;
