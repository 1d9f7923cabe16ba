//! Datasets for feeding `scalargrad-core` training loops.

pub mod datasets;

pub use datasets::{wave, Dataset, VecDataset, WaveDataset};
