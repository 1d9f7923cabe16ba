// src/node/traits.rs

use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

impl Clone for Node {
    /// Shallow clone: the new handle shares value, gradient and operands.
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}

// Operands are deliberately not printed: a graph can be large, and a
// malformed one could recurse forever.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Node")
            .field("id", &self.id())
            .field("value", &guard.value)
            .field("grad", &guard.grad)
            .field("op", &guard.op.name())
            .field("label", &guard.label)
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match &guard.label {
            Some(label) => write!(
                f,
                "{}(data={}, grad={}, op={})",
                label,
                guard.value,
                guard.grad,
                guard.op.name()
            ),
            None => write!(
                f,
                "Node(data={}, grad={}, op={})",
                guard.value,
                guard.grad,
                guard.op.name()
            ),
        }
    }
}

/// Implements a binary `std::ops` trait for every pairing of `Node`, `&Node`
/// and `f64`. A scalar operand becomes a fresh constant leaf.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl $trait<&Node> for &Node {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Node> for Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Node> for Node {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Node> for &Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for &Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, &Node::new(rhs))
            }
        }

        impl $trait<f64> for Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(&self, &Node::new(rhs))
            }
        }

        impl $trait<&Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(&Node::new(self), rhs)
            }
        }

        impl $trait<Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&Node::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(&self)
    }
}

/// Sums through the graph, starting from a constant zero leaf.
impl Sum<Node> for Node {
    fn sum<I: Iterator<Item = Node>>(iter: I) -> Node {
        iter.fold(Node::new(0.0), |acc, node| add_op(&acc, &node))
    }
}

impl<'a> Sum<&'a Node> for Node {
    fn sum<I: Iterator<Item = &'a Node>>(iter: I) -> Node {
        iter.fold(Node::new(0.0), |acc, node| add_op(&acc, node))
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
