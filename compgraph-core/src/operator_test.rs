use super::*;
use approx::assert_relative_eq;

// Runs identity/combine/finalize over `parents` the way the graph does.
fn evaluate(op: Operator, parents: &[f64]) -> f64 {
    let mut acc = 0.0;
    op.identity(&mut acc);
    for (position, value) in parents.iter().enumerate() {
        op.combine(&mut acc, *value, position);
    }
    op.finalize(&mut acc);
    acc
}

#[test]
fn test_identity_seeds() {
    let mut acc = 42.0;
    Operator::Sum.identity(&mut acc);
    assert_eq!(acc, 0.0);
    Operator::Mult.identity(&mut acc);
    assert_eq!(acc, 1.0);
    Operator::Constant(-3.5).identity(&mut acc);
    assert_eq!(acc, -3.5);

    // Input is pass-through.
    let mut acc = 7.0;
    Operator::Input.identity(&mut acc);
    assert_eq!(acc, 7.0);
}

#[test]
fn test_forward_values() {
    assert_relative_eq!(evaluate(Operator::Sum, &[1.0, 2.0, 3.5]), 6.5);
    assert_relative_eq!(evaluate(Operator::Mult, &[2.0, 3.0, 4.0]), 24.0);
    assert_relative_eq!(evaluate(Operator::Difference, &[5.0, 2.0]), 3.0);
    assert_relative_eq!(evaluate(Operator::Difference, &[5.0, 2.0, 1.0]), 2.0);
    assert_relative_eq!(evaluate(Operator::Square, &[-3.0]), 9.0);
    assert_relative_eq!(evaluate(Operator::Sigmoid, &[0.0]), 0.5);
    assert_relative_eq!(evaluate(Operator::Sigmoid, &[1.0, -1.0]), 0.5);
    assert_relative_eq!(evaluate(Operator::Power(3.0), &[2.0]), 8.0);
    assert_relative_eq!(evaluate(Operator::Output, &[1.25]), 1.25);
}

#[test]
fn test_partials() {
    // Mult: node / parent
    let node = evaluate(Operator::Mult, &[2.0, 3.0]);
    assert_relative_eq!(Operator::Mult.partial(2.0, node, 0), 3.0);
    assert_relative_eq!(Operator::Mult.partial(3.0, node, 1), 2.0);

    assert_relative_eq!(Operator::Sum.partial(10.0, 12.0, 1), 1.0);
    assert_relative_eq!(Operator::Output.partial(10.0, 10.0, 0), 1.0);
    assert_relative_eq!(Operator::Difference.partial(5.0, 3.0, 0), 1.0);
    assert_relative_eq!(Operator::Difference.partial(2.0, 3.0, 1), -1.0);
    assert_relative_eq!(Operator::Square.partial(6.0, 36.0, 0), 12.0);

    let s = evaluate(Operator::Sigmoid, &[0.3]);
    assert_relative_eq!(Operator::Sigmoid.partial(0.3, s, 0), s * (1.0 - s));

    // d(x^3)/dx at x = 2 is 12
    let p = evaluate(Operator::Power(3.0), &[2.0]);
    assert_relative_eq!(Operator::Power(3.0).partial(2.0, p, 0), 12.0);

    assert_eq!(Operator::Input.partial(1.0, 1.0, 0), 0.0);
    assert_eq!(Operator::Constant(2.0).partial(1.0, 2.0, 0), 0.0);
}

#[test]
fn test_mult_partial_with_zero_parent_is_not_finite() {
    let node = evaluate(Operator::Mult, &[0.0, 3.0]);
    assert!(!Operator::Mult.partial(0.0, node, 0).is_finite());
}

#[test]
fn test_arity_bounds_and_names() {
    assert_eq!(Operator::Input.max_parents(), Some(0));
    assert_eq!(Operator::Constant(1.0).max_parents(), Some(0));
    assert_eq!(Operator::Output.max_parents(), Some(1));
    assert_eq!(Operator::Sum.max_parents(), None);
    assert!(Operator::Input.is_input());
    assert!(Operator::Output.is_output());
    assert_eq!(Operator::Power(0.5).to_string(), "Power(0.5)");
    assert_eq!(Operator::Sigmoid.to_string(), "Sigmoid");
}
