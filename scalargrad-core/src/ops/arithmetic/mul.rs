use crate::autograd::Op;
use crate::node::Node;

/// Computes `a * b`.
pub fn mul_op(a: &Node, b: &Node) -> Node {
    Node::from_op(a.value() * b.value(), Op::Mul(a.clone(), b.clone()))
}

/// grad_a = grad_output * b, grad_b = grad_output * a
pub(crate) fn mul_backward(a: f64, b: f64, grad_output: f64) -> (f64, f64) {
    (b * grad_output, a * grad_output)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
