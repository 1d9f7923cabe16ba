use crate::error::ScalarGradError;
use crate::nn::init::seeded_rng;
use crate::nn::{Activation, Module, Sequential};
use crate::optim::SgdOptimizer;

/// Hyperparameters for [`Trainer`](crate::train::Trainer) and the MLP it fits.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Widths of the hidden layers; the model is `1 -> hidden.. -> 1`.
    pub hidden_layers: Vec<usize>,
    pub hidden_activation: Activation,
    pub output_activation: Activation,
    /// Seed for parameter initialization.
    pub seed: u64,
    /// Log (and record) the loss every `log_every` epochs. 0 disables it.
    pub log_every: usize,
    pub momentum: f64,
    pub weight_decay: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            epochs: 10_000,
            learning_rate: 0.001,
            hidden_layers: vec![20],
            hidden_activation: Activation::Tanh,
            output_activation: Activation::Identity,
            seed: 42,
            log_every: 500,
            momentum: 0.0,
            weight_decay: 0.0,
        }
    }
}

impl TrainingConfig {
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_hidden_layers(mut self, hidden_layers: Vec<usize>) -> Self {
        self.hidden_layers = hidden_layers;
        self
    }

    pub fn with_activations(mut self, hidden: Activation, output: Activation) -> Self {
        self.hidden_activation = hidden;
        self.output_activation = output;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// Checks every field, returning the first problem as `InvalidConfig`.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.hidden_layers.is_empty() || self.hidden_layers.contains(&0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "hidden_layers must be non-empty with non-zero widths, got {:?}",
                self.hidden_layers
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        if !(self.weight_decay.is_finite() && self.weight_decay >= 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "weight_decay must be non-negative, got {}",
                self.weight_decay
            )));
        }
        Ok(())
    }

    /// Layer widths of the model, input and output included.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len() + 2);
        sizes.push(1);
        sizes.extend_from_slice(&self.hidden_layers);
        sizes.push(1);
        sizes
    }

    /// Builds the seeded `1 -> hidden.. -> 1` MLP described by this config.
    pub fn build_model(&self) -> Result<Sequential, ScalarGradError> {
        self.validate()?;
        let mut rng = seeded_rng(self.seed);
        Sequential::mlp(
            &self.layer_sizes(),
            self.hidden_activation,
            self.output_activation,
            &mut rng,
        )
    }

    /// Builds an SGD optimizer over every parameter of `model`.
    pub fn build_optimizer<M: Module>(&self, model: &M) -> Result<SgdOptimizer, ScalarGradError> {
        self.validate()?;
        let params = model.parameters().into_iter().cloned().collect();
        SgdOptimizer::new(params, self.learning_rate)?
            .with_momentum(self.momentum)?
            .with_weight_decay(self.weight_decay)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
