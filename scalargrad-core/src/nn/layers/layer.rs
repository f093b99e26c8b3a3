use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::{Activation, Init, Module, Parameter, Unit};
use rand::Rng;

/// `n_output` units reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    units: Vec<Unit>,
    n_input: usize,
    activation: Activation,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_input: usize,
        n_output: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let mut units = Vec::with_capacity(n_output);
        for _ in 0..n_output {
            units.push(Unit::new(graph, n_input, activation, init, rng)?);
        }
        Ok(Layer {
            units,
            n_input,
            activation,
        })
    }

    /// Builds a layer from existing units. Every unit must take `n_input`
    /// inputs.
    pub fn from_units(n_input: usize, units: Vec<Unit>) -> Result<Self, ScalarGradError> {
        if let Some(unit) = units.iter().find(|u| u.n_input() != n_input) {
            return Err(ScalarGradError::DimensionMismatch {
                expected: n_input,
                actual: unit.n_input(),
            });
        }
        let activation = units.first().map(Unit::activation).unwrap_or_default();
        Ok(Layer {
            units,
            n_input,
            activation,
        })
    }

    pub fn n_input(&self) -> usize {
        self.n_input
    }

    pub fn n_output(&self) -> usize {
        self.units.len()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        if inputs.len() != self.n_input {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.n_input,
                actual: inputs.len(),
            });
        }
        self.units
            .iter()
            .map(|unit| unit.output(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.units.iter().flat_map(|u| u.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.units
            .iter()
            .enumerate()
            .flat_map(|(i, unit)| {
                unit.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("unit{i}.{name}"), p))
            })
            .collect()
    }
}
