use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::node::{Node, NodeId};
use log::debug;
use std::collections::HashMap;

impl Node {
    /// Performs the backward pass starting from this node.
    ///
    /// If the node has not been seeded (its gradient is still zero), it is
    /// seeded with `1.0`, i.e. d(self)/d(self). A non-zero gradient set with
    /// [`Node::set_grad`] is used as-is.
    ///
    /// Every node reachable from `self` receives `+=` its gradient for this
    /// pass. Parameters must be reset with [`Node::reset_grad`] between passes
    /// unless accumulation is wanted.
    ///
    /// # Errors
    /// Returns `ScalarGradError::CycleDetected` if the operand graph is not a
    /// DAG. No gradient is written in that case.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if self.grad() == 0.0 {
            debug!("backward() called on an unseeded node. Seeding with 1.0.");
            self.set_grad(1.0);
        }
        self.propagate()
    }

    /// Overwrites this node's gradient with `seed`, then runs the backward pass.
    pub fn backward_with_grad(&self, seed: f64) -> Result<(), ScalarGradError> {
        self.set_grad(seed);
        self.propagate()
    }

    fn propagate(&self) -> Result<(), ScalarGradError> {
        let sorted_nodes = topological_sort(self)?;
        debug!(
            "backward: {} nodes reachable from {}",
            sorted_nodes.len(),
            self.display_name()
        );

        // Gradients for this pass only, keyed by node. A node's entry is
        // complete by the time it is reached because all of its consumers
        // precede it in `sorted_nodes`.
        let root_id = self.id();
        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
        grad_map.insert(root_id, self.grad());

        for node in &sorted_nodes {
            let node_id = node.id();
            let Some(upstream_grad) = grad_map.remove(&node_id) else {
                continue;
            };
            // The root already holds its seed.
            if node_id != root_id {
                node.accumulate_grad(upstream_grad);
            }

            let (op, value) = {
                let guard = node.read_data();
                (guard.op.clone(), guard.value)
            };
            for (input_id, contribution) in op.backward(value, upstream_grad) {
                *grad_map.entry(input_id).or_insert(0.0) += contribution;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
