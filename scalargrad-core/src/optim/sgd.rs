use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::optim::Optimizer;
use log::{debug, warn};

/// Implements stochastic gradient descent (optionally with momentum and
/// weight decay).
///
/// For each parameter `p` with gradient `g`:
/// `d = g + weight_decay * p`; with momentum `v = momentum * v + d; d = v`;
/// then `p = p - lr * d`. With the defaults this is plain `p -= lr * g`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    velocity: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a new SGD optimizer over `params`.
    ///
    /// # Errors
    /// `InvalidConfig` if `lr` is not a positive finite number.
    pub fn new(params: Vec<Parameter>, lr: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        let velocity = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            velocity,
        })
    }

    /// Momentum factor in `[0, 1)`.
    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, ScalarGradError> {
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        self.momentum = momentum;
        Ok(self)
    }

    /// L2 penalty coefficient, must be non-negative.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, ScalarGradError> {
        if !(weight_decay.is_finite() && weight_decay >= 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "weight_decay must be non-negative, got {}",
                weight_decay
            )));
        }
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        debug!(
            "SGD step over {} parameters (lr={}, momentum={})",
            self.params.len(),
            self.lr,
            self.momentum
        );
        for (param, velocity) in self.params.iter().zip(self.velocity.iter_mut()) {
            let value = param.value();
            let mut d = param.grad() + self.weight_decay * value;
            if self.momentum > 0.0 {
                *velocity = self.momentum * *velocity + d;
                d = *velocity;
            }
            param.set_value(value - self.lr * d)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.reset_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        validate_lr(lr)?;
        if self.momentum > 0.0 {
            warn!(
                "learning rate changed from {} to {} with momentum {}; velocity is kept",
                self.lr, lr, self.momentum
            );
        }
        self.lr = lr;
        Ok(())
    }
}

fn validate_lr(lr: f64) -> Result<(), ScalarGradError> {
    if !(lr.is_finite() && lr > 0.0) {
        return Err(ScalarGradError::InvalidConfig(format!(
            "learning rate must be positive and finite, got {}",
            lr
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
