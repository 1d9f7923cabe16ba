use crate::node::{Node, NodeId};
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::div::div_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::neg::neg_backward;
use crate::ops::arithmetic::sub::sub_backward;

/// The operation that produced a node, with its operands in recorded order.
///
/// The operator set is closed, so the backward rule is a `match` on this tag
/// instead of a boxed closure per node. Each arm delegates to the
/// `*_backward` function that lives next to the operator's forward code.
#[derive(Clone)]
pub(crate) enum Op {
    Leaf,
    Add(Node, Node),
    Sub(Node, Node),
    Mul(Node, Node),
    Div(Node, Node),
    Neg(Node),
    Tanh(Node),
}

impl Op {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add(..) => "add",
            Op::Sub(..) => "sub",
            Op::Mul(..) => "mul",
            Op::Div(..) => "div",
            Op::Neg(_) => "neg",
            Op::Tanh(_) => "tanh",
        }
    }

    pub(crate) fn operands(&self) -> Vec<Node> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) | Op::Div(a, b) => {
                vec![a.clone(), b.clone()]
            }
            Op::Neg(a) | Op::Tanh(a) => vec![a.clone()],
        }
    }

    pub(crate) fn into_operands(self) -> Vec<Node> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) | Op::Div(a, b) => vec![a, b],
            Op::Neg(a) | Op::Tanh(a) => vec![a],
        }
    }

    /// Applies the chain rule for this op.
    ///
    /// Given the node's forward value and the gradient flowing into it,
    /// returns the increment owed to each operand, in operand order. The same
    /// operand may appear twice (e.g. `a * a`); callers must add both.
    pub(crate) fn backward(&self, output_value: f64, grad_output: f64) -> Vec<(NodeId, f64)> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) => {
                let (grad_a, grad_b) = add_backward(grad_output);
                vec![(a.id(), grad_a), (b.id(), grad_b)]
            }
            Op::Sub(a, b) => {
                let (grad_a, grad_b) = sub_backward(grad_output);
                vec![(a.id(), grad_a), (b.id(), grad_b)]
            }
            Op::Mul(a, b) => {
                let (grad_a, grad_b) = mul_backward(a.value(), b.value(), grad_output);
                vec![(a.id(), grad_a), (b.id(), grad_b)]
            }
            Op::Div(a, b) => {
                let (grad_a, grad_b) = div_backward(a.value(), b.value(), grad_output);
                vec![(a.id(), grad_a), (b.id(), grad_b)]
            }
            Op::Neg(a) => vec![(a.id(), neg_backward(grad_output))],
            Op::Tanh(a) => vec![(a.id(), tanh_backward(output_value, grad_output))],
        }
    }
}
