use crate::error::ScalarGradError;
use crate::node::Node;
use std::fmt;
use std::ops::Deref;

/// A learnable scalar owned by a [`Module`](crate::nn::Module).
///
/// Wraps a leaf [`Node`] plus an optional name. Parameters are long-lived:
/// they survive across forward passes while the intermediate graph built on
/// top of them is rebuilt every pass.
pub struct Parameter {
    node: Node,
    name: Option<String>,
}

impl Parameter {
    /// Creates a new parameter leaf. The name doubles as the node label.
    pub fn new(value: f64, name: Option<String>) -> Self {
        let node = match &name {
            Some(n) => Node::labeled(value, n.clone()),
            None => Node::new(value),
        };
        Parameter { node, name }
    }

    pub fn new_unnamed(value: f64) -> Self {
        Parameter::new(value, None)
    }

    /// Wraps an existing node.
    ///
    /// # Errors
    /// Returns `ScalarGradError::NotALeaf` if `node` was produced by an operator.
    pub fn from_node(node: Node, name: Option<String>) -> Result<Self, ScalarGradError> {
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf {
                operation: "Parameter::from_node".to_string(),
            });
        }
        Ok(Parameter { node, name })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Consumes the Parameter and returns the underlying node.
    pub fn into_inner(self) -> Node {
        self.node
    }
}

// Allow accessing the underlying Node immutably via Deref.
impl Deref for Parameter {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parameter(name={:?}, value={}, grad={})",
            self.name,
            self.node.value(),
            self.node.grad()
        )
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the underlying node handle (shallow clone via Rc).
    fn clone(&self) -> Self {
        Parameter {
            node: self.node.clone(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
