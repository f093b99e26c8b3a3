//! # scalargrad-optim
//!
//! Gradient-based optimizers for the trainable [`Parameter`]s of a
//! `scalargrad-core` graph.
//!
//! A training step is: build the loss, call `optimizer.zero_grad`, run
//! `graph.backward(loss)`, then `optimizer.step`. Optimizers never reset
//! gradients on their own.

use scalargrad_core::nn::Parameter;
use scalargrad_core::{Graph, ScalarGradError};

// Define modules for optimizers
pub mod adam;
pub mod sgd;

pub use adam::{Adam, AdamConfig};
pub use sgd::{Sgd, SgdConfig};

/// Trait for optimization algorithms.
/// Optimizers update the parameters of a model based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// Either every parameter is updated or, when one of them is not live in
    /// `graph`, none is.
    fn step(&mut self, graph: &mut Graph, params: &[Parameter]) -> Result<(), ScalarGradError>;

    /// Clears the gradients of `params`.
    /// Should be called before the backward pass to avoid accumulating gradients
    /// from multiple iterations.
    fn zero_grad(&self, graph: &mut Graph, params: &[Parameter]) -> Result<(), ScalarGradError> {
        for param in params {
            graph.clear_grad(param.id())?;
        }
        Ok(())
    }
}

/// Reads the gradient of every parameter, failing before any update if one
/// is not live in `graph`.
pub(crate) fn collect_grads(graph: &Graph, params: &[Parameter]) -> Result<Vec<f64>, ScalarGradError> {
    params.iter().map(|p| p.grad(graph)).collect()
}
