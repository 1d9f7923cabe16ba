use crate::error::ScalarGradError;
use crate::nn::{MSELoss, Module, Reduction};
use crate::node::Node;
use crate::optim::Optimizer;
use crate::train::TrainingConfig;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Outcome of [`Trainer::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// `(epoch, loss)` for every logged epoch, plus the last one run.
    pub losses: Vec<(usize, f64)>,
    pub final_loss: f64,
    pub epochs_run: usize,
    /// True if the cancel flag stopped training early.
    pub cancelled: bool,
}

/// Full-batch gradient descent on `(x, y)` pairs with mean squared error.
#[derive(Debug)]
pub struct Trainer<M: Module, O: Optimizer> {
    model: M,
    optimizer: O,
    config: TrainingConfig,
    loss_fn: MSELoss,
    cancel: Option<Arc<AtomicBool>>,
}

impl<M: Module, O: Optimizer> Trainer<M, O> {
    pub fn new(model: M, optimizer: O, config: TrainingConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        Ok(Trainer {
            model,
            optimizer,
            config,
            loss_fn: MSELoss::new(Reduction::Mean),
            cancel: None,
        })
    }

    /// Training stops before the next epoch once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Runs `config.epochs` epochs over `data`.
    ///
    /// Each epoch rebuilds the graph: one forward pass per example, one loss
    /// node, one backward pass, one optimizer step, then the gradients are
    /// cleared.
    ///
    /// # Errors
    /// `EmptyDataset` if `data` is empty, `ShapeMismatch` if the model does
    /// not produce exactly one output, `NonFiniteLoss` if the loss diverges.
    pub fn fit(&mut self, data: &[(f64, f64)]) -> Result<TrainingReport, ScalarGradError> {
        if data.is_empty() {
            return Err(ScalarGradError::EmptyDataset);
        }
        info!(
            "Training {} parameters on {} examples for {} epochs (lr={})",
            self.model.num_parameters(),
            data.len(),
            self.config.epochs,
            self.optimizer.learning_rate()
        );

        let mut losses = Vec::new();
        let mut final_loss = f64::NAN;
        let mut epochs_run = 0;
        let mut cancelled = false;

        for epoch in 0..self.config.epochs {
            if self.is_cancelled() {
                info!("Training cancelled before epoch {}", epoch);
                cancelled = true;
                break;
            }

            let loss = self.epoch_loss(data)?;
            let loss_value = loss.value();
            if !loss_value.is_finite() {
                return Err(ScalarGradError::NonFiniteLoss {
                    epoch,
                    value: loss_value,
                });
            }

            loss.backward_with_grad(1.0)?;
            self.optimizer.step()?;
            self.optimizer.zero_grad();

            final_loss = loss_value;
            epochs_run = epoch + 1;
            if self.config.log_every > 0 && epoch % self.config.log_every == 0 {
                info!("Epoch {}: Loss = {}", epoch, loss_value);
                losses.push((epoch, loss_value));
            } else {
                debug!("Epoch {}: Loss = {}", epoch, loss_value);
            }
        }

        if epochs_run > 0 && losses.last().map(|&(e, _)| e) != Some(epochs_run - 1) {
            losses.push((epochs_run - 1, final_loss));
        }

        Ok(TrainingReport {
            losses,
            final_loss,
            epochs_run,
            cancelled,
        })
    }

    /// Evaluates the model at `x` without touching any gradient.
    pub fn predict(&self, x: f64) -> Result<f64, ScalarGradError> {
        Ok(self.forward_one(&Node::new(x))?.value())
    }

    fn epoch_loss(&self, data: &[(f64, f64)]) -> Result<Node, ScalarGradError> {
        let mut predictions = Vec::with_capacity(data.len());
        let mut targets = Vec::with_capacity(data.len());
        for (i, &(x, y)) in data.iter().enumerate() {
            let input = Node::labeled(x, format!("x_{}", i));
            predictions.push(self.forward_one(&input)?);
            targets.push(Node::labeled(y, format!("y_{}", i)));
        }
        self.loss_fn.calculate(&predictions, &targets)
    }

    fn forward_one(&self, input: &Node) -> Result<Node, ScalarGradError> {
        let outputs = self.model.forward(std::slice::from_ref(input))?;
        match <[Node; 1]>::try_from(outputs) {
            Ok([output]) => Ok(output),
            Err(outputs) => Err(ScalarGradError::ShapeMismatch {
                expected: 1,
                actual: outputs.len(),
                operation: "Trainer::forward".to_string(),
            }),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
