// src/optim/mod.rs
// Parameter update rules driven by accumulated gradients.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
