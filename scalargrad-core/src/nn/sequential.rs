use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::Linear;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::node::Node;
use rand::Rng;

/// A stack of [`Linear`] layers, each followed by an [`Activation`].
#[derive(Debug, Clone, Default)]
pub struct Sequential {
    layers: Vec<(Linear, Activation)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential { layers: Vec::new() }
    }

    /// Appends a layer. Its input width must match the previous layer's output.
    pub fn push(&mut self, layer: Linear, activation: Activation) -> Result<(), ScalarGradError> {
        if let Some((last, _)) = self.layers.last() {
            if last.out_features() != layer.in_features() {
                return Err(ScalarGradError::ShapeMismatch {
                    expected: last.out_features(),
                    actual: layer.in_features(),
                    operation: "Sequential::push".to_string(),
                });
            }
        }
        self.layers.push((layer, activation));
        Ok(())
    }

    /// Builds a multilayer perceptron from layer widths, e.g. `&[1, 20, 1]`.
    ///
    /// Every layer but the last uses `hidden`; the last uses `output`.
    pub fn mlp<R: Rng + ?Sized>(
        sizes: &[usize],
        hidden: Activation,
        output: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if sizes.len() < 2 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "an MLP needs at least input and output widths, got {:?}",
                sizes
            )));
        }
        let mut model = Sequential::new();
        let last = sizes.len() - 2;
        for (idx, pair) in sizes.windows(2).enumerate() {
            let activation = if idx == last { output } else { hidden };
            model.push(Linear::new(pair[0], pair[1], rng)?, activation)?;
        }
        Ok(model)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, idx: usize) -> Option<&Linear> {
        self.layers.get(idx).map(|(layer, _)| layer)
    }
}

impl Module for Sequential {
    fn forward(&self, input: &[Node]) -> Result<Vec<Node>, ScalarGradError> {
        let mut current = input.to_vec();
        for (layer, activation) in &self.layers {
            current = layer
                .forward(&current)?
                .iter()
                .map(|node| activation.apply(node))
                .collect();
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers
            .iter()
            .flat_map(|(layer, _)| layer.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(idx, (layer, _))| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", idx, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
