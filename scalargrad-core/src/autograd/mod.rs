//! Reverse-mode differentiation over the scalar node graph.
//!
//! Every non-leaf [`Node`](crate::node::Node) stores an [`Op`] tag naming the
//! operator that produced it together with its operands. `Node::backward()`
//! sorts the reachable graph with [`graph::topological_sort`] and then walks
//! it consumers-first, dispatching on each tag to route gradients into the
//! operands.

pub mod backward_op;
mod dot;
pub mod grad_check;
pub mod graph;

pub(crate) use backward_op::Op;
pub use grad_check::{check_grad, numerical_grad, GradCheckError};
pub use graph::topological_sort;
