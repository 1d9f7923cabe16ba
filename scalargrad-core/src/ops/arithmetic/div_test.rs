use super::*;
use crate::autograd::grad_check::check_grad;
use crate::error::ScalarGradError;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Node::new(3.0);
    let b = Node::new(4.0);
    assert_eq!(div_op(&a, &b).value(), 0.75);
}

#[test]
fn test_div_backward() -> Result<(), ScalarGradError> {
    let a = Node::new(3.0);
    let b = Node::new(4.0);
    let c = div_op(&a, &b);
    c.backward()?;
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -3.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_grad_check() {
    let inputs = [Node::new(-1.3), Node::new(0.6)];
    let result = check_grad(|x| Ok(div_op(&x[0], &x[1])), &inputs, 1e-6, 1e-5);
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_div_by_zero_propagates_non_finite() -> Result<(), ScalarGradError> {
    let a = Node::new(1.0);
    let zero = Node::new(0.0);
    let c = div_op(&a, &zero);
    assert!(c.value().is_infinite());
    c.backward()?;
    assert!(a.grad().is_infinite());
    assert!(zero.grad().is_infinite());

    let nan = div_op(&zero, &zero);
    assert!(nan.value().is_nan());
    Ok(())
}
