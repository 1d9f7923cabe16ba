pub mod traits;
pub mod vec_dataset;
pub mod wave;

pub use traits::Dataset;
pub use vec_dataset::VecDataset;
pub use wave::{wave, WaveDataset};
