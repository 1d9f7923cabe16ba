use crate::error::ScalarGradError;
use crate::node::{Node, NodeId};
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the active DFS path; meeting it again means a cycle.
    InProgress,
    Done,
}

/// Sorts the graph reachable from `root` so that every node comes after all
/// of its consumers (root first, leaves last).
///
/// Post-order DFS keyed by [`NodeId`]: a node is emitted only once all of its
/// operands have been, then the emission order is reversed. The traversal
/// keeps its own stack, so long operand chains (a loss summed over many
/// examples) do not exhaust the call stack.
///
/// # Errors
/// Returns `ScalarGradError::CycleDetected` if a node is reached again while
/// it is still on the active path.
pub fn topological_sort(root: &Node) -> Result<Vec<Node>, ScalarGradError> {
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut sorted_list: Vec<Node> = Vec::new();
    // (node, operands_already_pushed)
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        let node_id = node.id();
        if expanded {
            marks.insert(node_id, Mark::Done);
            sorted_list.push(node);
            continue;
        }
        match marks.get(&node_id) {
            Some(Mark::Done) => continue,
            Some(Mark::InProgress) => {
                return Err(ScalarGradError::CycleDetected {
                    node: node.display_name(),
                })
            }
            None => {}
        }
        marks.insert(node_id, Mark::InProgress);
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is expanded first.
        for operand in operands.into_iter().rev() {
            match marks.get(&operand.id()) {
                Some(Mark::Done) => {}
                Some(Mark::InProgress) => {
                    return Err(ScalarGradError::CycleDetected {
                        node: operand.display_name(),
                    })
                }
                None => stack.push((operand, false)),
            }
        }
    }

    sorted_list.reverse();
    Ok(sorted_list)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
