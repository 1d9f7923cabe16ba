// src/node/mod.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

mod autograd_methods;
mod traits;

/// A scalar vertex of the computation graph.
///
/// `Node` uses `Rc<RefCell<NodeData>>` internally to allow for:
/// 1.  **Shared Ownership:** every consumer built from a node keeps a strong
///     handle to it, so cloning a `Node` is cheap and never copies the value.
/// 2.  **Interior Mutability:** the gradient accumulator (and a leaf's value)
///     can be updated through a shared handle during the backward pass and
///     the optimizer step.
///
/// A node is either a leaf (parameter, input, constant) or the result of one
/// of the operators in [`crate::ops`], in which case it records its operands
/// and how to route a gradient back to them.
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

/// Internal state of a [`Node`].
pub(crate) struct NodeData {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

/// Identity of a node, stable for as long as any handle to it is alive.
///
/// Derived from the address of the shared cell, so two clones of the same
/// `Node` report the same id while two leaves with equal values do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Node {
    /// Creates a leaf node with zero gradient.
    pub fn new(value: f64) -> Node {
        Node::from_parts(value, Op::Leaf, None)
    }

    /// Creates a leaf node carrying a debugging label.
    pub fn labeled(value: f64, label: impl Into<String>) -> Node {
        Node::from_parts(value, Op::Leaf, Some(label.into()))
    }

    /// Wraps the result of an operator. Used by the functions in `crate::ops`.
    pub(crate) fn from_op(value: f64, op: Op) -> Node {
        Node::from_parts(value, op, None)
    }

    fn from_parts(value: f64, op: Op, label: Option<String>) -> Node {
        Node {
            data: Rc::new(RefCell::new(NodeData {
                value,
                grad: 0.0,
                op,
                label,
            })),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    /// The forward-computed value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// The gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient. Used to seed the terminal node of a backward pass.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Sets the gradient back to zero.
    ///
    /// Gradients only ever accumulate during backward passes, so every
    /// parameter must be reset before the next pass or stale contributions
    /// leak into the new gradient.
    pub fn reset_grad(&self) {
        self.write_data().grad = 0.0;
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Replaces the value of a leaf.
    ///
    /// # Errors
    /// Returns `ScalarGradError::NotALeaf` if this node was produced by an
    /// operator: its value is a function of its operands.
    pub fn set_value(&self, value: f64) -> Result<(), ScalarGradError> {
        let mut guard = self.write_data();
        if !matches!(guard.op, Op::Leaf) {
            return Err(ScalarGradError::NotALeaf {
                operation: "set_value".to_string(),
            });
        }
        guard.value = value;
        Ok(())
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.data) as usize)
    }

    /// Returns true if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.read_data().op, Op::Leaf)
    }

    /// Name of the operation that produced this node (`"leaf"` for leaves).
    pub fn op_name(&self) -> &'static str {
        self.read_data().op.name()
    }

    /// Operands in recorded order: empty for leaves, `[a]` or `[a, b]` otherwise.
    pub fn operands(&self) -> Vec<Node> {
        self.read_data().op.operands()
    }

    /// Label if present, otherwise the op name and id. Used in diagnostics.
    pub(crate) fn display_name(&self) -> String {
        let guard = self.read_data();
        match &guard.label {
            Some(label) => label.clone(),
            None => format!("{}#{}", guard.op.name(), self.id()),
        }
    }

    #[cfg(test)]
    pub(crate) fn replace_op(&self, op: Op) {
        self.write_data().op = op;
    }
}

// Dropping the last handle to a long chain (a loss summed over many
// examples) would otherwise recurse once per link.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, Op::Leaf).into_operands();
        while let Some(node) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(node.data) {
                let mut data = cell.into_inner();
                pending.extend(std::mem::replace(&mut data.op, Op::Leaf).into_operands());
            }
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
