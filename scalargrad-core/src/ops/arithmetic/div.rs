use crate::autograd::Op;
use crate::node::Node;

/// Computes `a / b`.
///
/// Division by zero is not an error: the result follows IEEE-754 (`±inf` or
/// `NaN`) and so do the gradients routed through it. Callers that need
/// stricter behavior should check `value()` / `grad()` for non-finite results.
pub fn div_op(a: &Node, b: &Node) -> Node {
    Node::from_op(a.value() / b.value(), Op::Div(a.clone(), b.clone()))
}

/// grad_a = grad_output / b, grad_b = -a * grad_output / b^2
pub(crate) fn div_backward(a: f64, b: f64, grad_output: f64) -> (f64, f64) {
    (grad_output / b, -a * grad_output / (b * b))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
