use crate::autograd::Op;
use crate::node::Node;

/// Computes `-a`.
pub fn neg_op(a: &Node) -> Node {
    Node::from_op(-a.value(), Op::Neg(a.clone()))
}

pub(crate) fn neg_backward(grad_output: f64) -> f64 {
    -grad_output
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
