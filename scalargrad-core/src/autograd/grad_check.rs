use crate::error::ScalarGradError;
use crate::node::Node;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical:?} != Numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Gradient check input must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Node error during gradient check: {0}")]
    NodeError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::NodeError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// Runs `func` once forward and backward (seed `1.0`) to collect the
/// analytical gradient of every input, then estimates each one as
/// `(f(x + ε) - f(x - ε)) / 2ε` by temporarily moving that input's value.
/// Values are restored before returning. Input gradients are reset first and
/// hold the analytical gradients afterwards.
///
/// `tolerance` is used both as the absolute and the relative bound.
pub fn check_grad<F>(
    func: F,
    inputs: &[Node],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.reset_grad();
    }

    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward_with_grad(1.0)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = inputs.iter().map(Node::grad).collect();

    for (input_index, &analytical) in analytical_grads.iter().enumerate() {
        let numerical = numerical_grad(&func, inputs, input_index, epsilon)?;
        debug!(
            "check_grad: input {} analytical={} numerical={}",
            input_index, analytical, numerical
        );
        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

/// Central-difference estimate of d(func)/d(inputs[index]).
pub fn numerical_grad<F>(
    func: &F,
    inputs: &[Node],
    index: usize,
    epsilon: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarGradError>,
{
    let input = inputs.get(index).ok_or(ScalarGradError::IndexOutOfBounds {
        index,
        len: inputs.len(),
    })?;
    if !input.is_leaf() {
        return Err(GradCheckError::InputNotLeaf { input_index: index });
    }

    let original = input.value();
    input.set_value(original + epsilon)?;
    let plus = func(inputs);
    input.set_value(original - epsilon)?;
    let minus = func(inputs);
    input.set_value(original)?;

    let loss_plus = plus.map_err(GradCheckError::ForwardPassError)?.value();
    let loss_minus = minus.map_err(GradCheckError::ForwardPassError)?.value();
    if !loss_plus.is_finite() || !loss_minus.is_finite() {
        return Err(GradCheckError::NumericalGradNonFinite {
            input_index: index,
            loss_plus,
            loss_minus,
        });
    }
    Ok((loss_plus - loss_minus) / (2.0 * epsilon))
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
