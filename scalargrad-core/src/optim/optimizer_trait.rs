use crate::error::ScalarGradError;

/// Trait for optimization algorithms.
/// Optimizers update the parameters they were built with, based on the
/// gradients accumulated by the last backward pass.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    /// Must run between backward passes, gradients accumulate otherwise.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError>;
}
