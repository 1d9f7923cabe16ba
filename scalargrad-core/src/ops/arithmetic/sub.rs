use crate::autograd::Op;
use crate::node::Node;

/// Computes `a - b`.
pub fn sub_op(a: &Node, b: &Node) -> Node {
    Node::from_op(a.value() - b.value(), Op::Sub(a.clone(), b.clone()))
}

pub(crate) fn sub_backward(grad_output: f64) -> (f64, f64) {
    (grad_output, -grad_output)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
