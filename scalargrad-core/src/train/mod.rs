// src/train/mod.rs
// Full-batch training loop for single-input, single-output models.

pub mod config;
pub mod trainer;

pub use config::TrainingConfig;
pub use trainer::{Trainer, TrainingReport};
