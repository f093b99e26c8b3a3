use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::{Activation, Init, Layer, Module, Parameter};
use rand::Rng;

/// Multi-layer perceptron: a chain of fully connected [`Layer`]s.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    n_input: usize,
}

impl Mlp {
    /// Creates a network with parameters drawn from the default init
    /// (uniform over `[-1, 1)`).
    ///
    /// `layer_sizes[i]` is the number of units of layer `i`. An empty
    /// `activations` slice means every layer is [`Activation::Linear`];
    /// otherwise it needs one entry per layer.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_input: usize,
        layer_sizes: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::with_init(graph, n_input, layer_sizes, activations, &Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_input: usize,
        layer_sizes: &[usize],
        activations: &[Activation],
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let activations = if activations.is_empty() {
            vec![Activation::Linear; layer_sizes.len()]
        } else if activations.len() == layer_sizes.len() {
            activations.to_vec()
        } else {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "expected {} activations (one per layer), got {}",
                layer_sizes.len(),
                activations.len()
            )));
        };
        init.validate()?;

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_input;
        for (&size, &activation) in layer_sizes.iter().zip(&activations) {
            layers.push(Layer::new(graph, fan_in, size, activation, init, rng)?);
            fan_in = size;
        }
        log::debug!(
            "Built MLP {:?} with {} inputs and {} parameters",
            layer_sizes,
            n_input,
            layers.iter().map(Layer::num_parameters).sum::<usize>()
        );
        Ok(Mlp { layers, n_input })
    }

    pub fn n_input(&self) -> usize {
        self.n_input
    }

    /// Width of the last layer, or of the input for a network without layers.
    pub fn n_output(&self) -> usize {
        self.layers.last().map_or(self.n_input, Layer::n_output)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        if inputs.len() != self.n_input {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.n_input,
                actual: inputs.len(),
            });
        }
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(graph, &x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{i}.{name}"), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
