use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::Parameter;

/// The base trait for all neural network modules (units, layers, networks).
///
/// Modules do not own a graph: `forward` appends the computation to the
/// caller's graph, in which the module's parameters must already live.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `DimensionMismatch` when `inputs` does not have the expected length,
    /// `InvalidOperand` when an input or parameter is not live in `graph`.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError>;

    /// Returns all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. "layer0.unit1.w2").
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), ScalarGradError> {
        for param in self.parameters() {
            graph.clear_grad(param.id())?;
        }
        Ok(())
    }
}
