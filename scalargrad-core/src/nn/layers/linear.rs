use crate::error::ScalarGradError;
use crate::nn::init::uniform;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::node::Node;
use rand::Rng;
use rand_distr::Distribution;

/// Fully connected layer over scalar nodes: `y_j = b_j + Σ_i x_i · W_{i,j}`.
///
/// Weights are stored row-major by input (`weights[i][j]` connects input `i`
/// to output `j`) and named `W_{i}_{j}`; biases are named `b_{j}`.
#[derive(Debug, Clone)]
pub struct Linear {
    weights: Vec<Vec<Parameter>>,
    biases: Vec<Parameter>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a layer with every weight and bias drawn from U(-1, 1).
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Linear::with_init_range(in_features, out_features, -1.0, 1.0, rng)
    }

    /// Creates a layer with every weight and bias drawn from U(low, high).
    pub fn with_init_range<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if in_features == 0 || out_features == 0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "Linear layer needs non-zero features, got {} -> {}",
                in_features, out_features
            )));
        }
        let dist = uniform(low, high)?;
        let weights = (0..in_features)
            .map(|i| {
                (0..out_features)
                    .map(|j| Parameter::new(dist.sample(rng), Some(format!("W_{}_{}", i, j))))
                    .collect()
            })
            .collect();
        let biases = (0..out_features)
            .map(|j| Parameter::new(dist.sample(rng), Some(format!("b_{}", j))))
            .collect();
        Ok(Linear {
            weights,
            biases,
            in_features,
            out_features,
        })
    }

    /// Builds a layer from explicit values. `weights` is indexed `[input][output]`.
    pub fn from_values(weights: Vec<Vec<f64>>, biases: Vec<f64>) -> Result<Self, ScalarGradError> {
        let in_features = weights.len();
        let out_features = biases.len();
        if in_features == 0 || out_features == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "Linear layer needs at least one weight row and one bias".to_string(),
            ));
        }
        let mut weight_params = Vec::with_capacity(in_features);
        for (i, row) in weights.into_iter().enumerate() {
            if row.len() != out_features {
                return Err(ScalarGradError::ShapeMismatch {
                    expected: out_features,
                    actual: row.len(),
                    operation: format!("Linear::from_values (weight row {})", i),
                });
            }
            weight_params.push(
                row.into_iter()
                    .enumerate()
                    .map(|(j, w)| Parameter::new(w, Some(format!("W_{}_{}", i, j))))
                    .collect(),
            );
        }
        let biases = biases
            .into_iter()
            .enumerate()
            .map(|(j, b)| Parameter::new(b, Some(format!("b_{}", j))))
            .collect();
        Ok(Linear {
            weights: weight_params,
            biases,
            in_features,
            out_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    pub fn weight(&self, input: usize, output: usize) -> Option<&Parameter> {
        self.weights.get(input).and_then(|row| row.get(output))
    }

    pub fn bias(&self, output: usize) -> Option<&Parameter> {
        self.biases.get(output)
    }
}

impl Module for Linear {
    fn forward(&self, input: &[Node]) -> Result<Vec<Node>, ScalarGradError> {
        if input.len() != self.in_features {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.in_features,
                actual: input.len(),
                operation: "Linear::forward".to_string(),
            });
        }
        let outputs = self
            .biases
            .iter()
            .enumerate()
            .map(|(j, bias)| {
                input
                    .iter()
                    .zip(&self.weights)
                    .fold(bias.node().clone(), |acc, (x, row)| acc + x * row[j].node())
            })
            .collect();
        Ok(outputs)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights
            .iter()
            .flatten()
            .chain(self.biases.iter())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or_default().to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
