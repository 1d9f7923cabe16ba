use crate::autograd::Op;
use crate::node::Node;

/// Computes the hyperbolic tangent of `a`.
pub fn tanh_op(a: &Node) -> Node {
    Node::from_op(a.value().tanh(), Op::Tanh(a.clone()))
}

/// d tanh(a) = 1 - tanh(a)^2. Takes the forward output so tanh is not
/// evaluated twice.
pub(crate) fn tanh_backward(output: f64, grad_output: f64) -> f64 {
    (1.0 - output * output) * grad_output
}

impl Node {
    /// Method form of [`tanh_op`].
    pub fn tanh(&self) -> Node {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
