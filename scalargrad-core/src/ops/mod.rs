// src/ops/mod.rs
//! Differentiable scalar operations.
//!
//! Every operator takes its operands by reference, computes the forward value
//! immediately and returns a new [`Node`](crate::node::Node) that records the
//! operands for the backward pass. The matching `*_backward` function next to
//! each forward gives the local derivative rule.

pub mod activation;
pub mod arithmetic;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
