use super::*;
use crate::autograd::grad_check::check_grad;
use crate::error::ScalarGradError;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Node::new(1.5);
    let b = Node::new(-4.0);
    let c = add_op(&a, &b);
    assert_eq!(c.value(), -2.5);
    assert_eq!(c.op_name(), "add");
    assert!(!c.is_leaf());
    assert_eq!(c.grad(), 0.0, "Fresh nodes start with zero grad");
}

#[test]
fn test_add_records_operands_in_order() {
    let a = Node::labeled(1.0, "a");
    let b = Node::labeled(2.0, "b");
    let c = add_op(&a, &b);
    let operands = c.operands();
    assert_eq!(operands.len(), 2);
    assert!(operands[0].ptr_eq(&a));
    assert!(operands[1].ptr_eq(&b));
}

#[test]
fn test_add_backward() -> Result<(), ScalarGradError> {
    let a = Node::new(3.0);
    let b = Node::new(7.0);
    let c = add_op(&a, &b);
    c.backward_with_grad(2.5)?;
    assert_eq!(a.grad(), 2.5);
    assert_eq!(b.grad(), 2.5);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarGradError> {
    let a = Node::new(3.0);
    let c = add_op(&a, &a);
    assert_eq!(c.value(), 6.0);
    c.backward()?;
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_backward_rule() {
    assert_eq!(add_backward(0.75), (0.75, 0.75));
}

#[test]
fn test_add_grad_check() {
    let inputs = [Node::new(0.3), Node::new(-1.2)];
    let result = check_grad(|x| Ok(add_op(&x[0], &x[1])), &inputs, 1e-6, 1e-5);
    assert!(result.is_ok(), "{:?}", result);
    assert_relative_eq!(inputs[0].grad(), 1.0);
    assert_relative_eq!(inputs[1].grad(), 1.0);
}
