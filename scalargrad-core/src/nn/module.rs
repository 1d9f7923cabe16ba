use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::node::Node;

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// A module maps a slice of input nodes to a vector of output nodes, building
/// graph on top of its parameters as it goes.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: One node per input feature.
    ///
    /// # Returns
    /// One node per output feature, or a `ScalarGradError` (typically
    /// `ShapeMismatch`) if the input width is wrong.
    fn forward(&self, input: &[Node]) -> Result<Vec<Node>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters with hierarchical names
    /// (e.g. "layers.0.W_0_3").
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.reset_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
