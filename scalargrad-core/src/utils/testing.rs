use crate::node::Node;
use approx::relative_eq;

/// Checks that a node's value and gradient are within `tolerance` of the
/// expected ones (absolute or relative).
/// Panics with the node's display form if either differs.
pub fn check_node_near(node: &Node, expected_value: f64, expected_grad: f64, tolerance: f64) {
    assert!(
        relative_eq!(node.value(), expected_value, epsilon = tolerance, max_relative = tolerance),
        "Value mismatch for {}: expected={:?}, tolerance={:?}",
        node,
        expected_value,
        tolerance
    );
    check_grad_near(node, expected_grad, tolerance);
}

/// Checks only the gradient of `node`.
pub fn check_grad_near(node: &Node, expected_grad: f64, tolerance: f64) {
    assert!(
        relative_eq!(node.grad(), expected_grad, epsilon = tolerance, max_relative = tolerance),
        "Grad mismatch for {}: expected={:?}, tolerance={:?}",
        node,
        expected_grad,
        tolerance
    );
}

/// Leaves labeled `{prefix}{i}` for each value.
pub fn labeled_leaves(prefix: &str, values: &[f64]) -> Vec<Node> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Node::labeled(v, format!("{}{}", prefix, i)))
        .collect()
}
