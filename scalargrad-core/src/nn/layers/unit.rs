use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::{Activation, Init, Module, Parameter};
use rand::Rng;

/// A single neuron: `act(b + Σ w_i x_i)`.
#[derive(Debug, Clone)]
pub struct Unit {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Unit {
    /// Creates a unit with `n_input` weights and a bias, all drawn from `init`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_input: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let mut params = init.parameters(graph, n_input + 1, rng)?;
        // Parameter count is n_input + 1, so there is always a last element.
        let bias = params.pop().ok_or_else(|| {
            ScalarGradError::InvalidConfiguration("unit created without a bias".to_string())
        })?;
        Ok(Unit {
            weights: params,
            bias,
            activation,
        })
    }

    /// Builds a unit around existing parameters.
    pub fn from_parameters(weights: Vec<Parameter>, bias: Parameter, activation: Activation) -> Self {
        Unit {
            weights,
            bias,
            activation,
        }
    }

    pub fn n_input(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> Parameter {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Forward pass returning the single output node.
    pub fn output(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let products = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, &x)| graph.mul(*w, x))
            .collect::<Result<Vec<_>, _>>()?;
        let mut z = self.bias.id();
        for product in products {
            z = graph.add(z, product)?;
        }
        self.activation.apply(graph, z)
    }
}

impl Module for Unit {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(vec![self.output(graph, inputs)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named: Vec<(String, Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{i}"), *w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "unit_test.rs"]
mod tests;
