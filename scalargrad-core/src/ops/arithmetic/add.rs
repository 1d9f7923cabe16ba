use crate::autograd::Op;
use crate::node::Node;

/// Computes `a + b`.
pub fn add_op(a: &Node, b: &Node) -> Node {
    Node::from_op(a.value() + b.value(), Op::Add(a.clone(), b.clone()))
}

/// d(a + b) = (1, 1), scaled by the upstream gradient.
pub(crate) fn add_backward(grad_output: f64) -> (f64, f64) {
    (grad_output, grad_output)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
