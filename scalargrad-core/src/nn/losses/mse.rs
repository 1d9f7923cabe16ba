use crate::error::ScalarGradError;
use crate::node::Node;
use std::str::FromStr;

/// Specifies the reduction to apply to the summed squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The loss is built from graph operators, so calling `backward()` on it
/// reaches every parameter that contributed to the predictions.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// `Σ (p_i - t_i)²`, divided by a constant leaf `N` under `Reduction::Mean`.
    ///
    /// # Errors
    /// `EmptyDataset` for empty inputs, `ShapeMismatch` if the lengths differ.
    pub fn calculate(&self, predictions: &[Node], targets: &[Node]) -> Result<Node, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyDataset);
        }

        let total: Node = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| {
                let diff = p - t;
                &diff * &diff
            })
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / Node::labeled(predictions.len() as f64, "N"),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
