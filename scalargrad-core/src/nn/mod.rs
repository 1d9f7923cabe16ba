// src/nn/mod.rs
// Layers, containers, losses and initializers built on top of `Node`.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter
pub mod sequential;

// Re-export common items
pub use activation::Activation;
pub use layers::linear::Linear;
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
pub use sequential::Sequential;
