use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::{Activation, Init, Mlp};
use rand::Rng;

/// Typed description of an [`Mlp`].
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub n_input: usize,
    pub layer_sizes: Vec<usize>,
    /// One per layer, or empty for all-linear.
    pub activations: Vec<Activation>,
    pub init: Init,
}

impl Default for MlpConfig {
    fn default() -> Self {
        MlpConfig {
            n_input: 1,
            layer_sizes: vec![1],
            activations: Vec::new(),
            init: Init::default(),
        }
    }
}

impl MlpConfig {
    pub fn new(n_input: usize, layer_sizes: Vec<usize>) -> Self {
        MlpConfig {
            n_input,
            layer_sizes,
            ..Default::default()
        }
    }

    pub fn with_activations(mut self, activations: Vec<Activation>) -> Self {
        self.activations = activations;
        self
    }

    /// Sets the activations from their names (`"relu"`, `"tanh"`, ...).
    pub fn with_activation_names(mut self, names: &[&str]) -> Result<Self, ScalarGradError> {
        self.activations = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Activation>, _>>()?;
        Ok(self)
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.n_input == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "n_input must be positive".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "at least one layer is required".to_string(),
            ));
        }
        if let Some(i) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "layer {i} has no units"
            )));
        }
        if !self.activations.is_empty() && self.activations.len() != self.layer_sizes.len() {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "expected {} activations (one per layer), got {}",
                self.layer_sizes.len(),
                self.activations.len()
            )));
        }
        for activation in &self.activations {
            if let Activation::LeakyRelu(alpha) = activation {
                if !alpha.is_finite() {
                    return Err(ScalarGradError::InvalidConfiguration(format!(
                        "leaky_relu slope must be finite, got {alpha}"
                    )));
                }
            }
        }
        self.init.validate()
    }

    /// Validates the configuration and creates the network's parameters in
    /// `graph`.
    pub fn build<R: Rng + ?Sized>(&self, graph: &mut Graph, rng: &mut R) -> Result<Mlp, ScalarGradError> {
        self.validate()?;
        Mlp::with_init(
            graph,
            self.n_input,
            &self.layer_sizes,
            &self.activations,
            &self.init,
            rng,
        )
    }
}
