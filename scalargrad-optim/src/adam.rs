use crate::{collect_grads, Optimizer};
use scalargrad_core::nn::Parameter;
use scalargrad_core::{Graph, NodeId, ScalarGradError};
use std::collections::HashMap;

/// Hyperparameters of [`Adam`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdamConfig {
    pub lr: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
}

impl Default for AdamConfig {
    fn default() -> Self {
        AdamConfig {
            lr: 1e-3,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
        }
    }
}

impl AdamConfig {
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !(self.lr.is_finite() && self.lr > 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "learning rate must be positive and finite, got {}",
                self.lr
            )));
        }
        for (name, beta) in [("beta1", self.beta1), ("beta2", self.beta2)] {
            if !(0.0..1.0).contains(&beta) {
                return Err(ScalarGradError::InvalidConfiguration(format!(
                    "{name} must be in [0, 1), got {beta}"
                )));
            }
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "epsilon must be non-negative and finite, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Implements the Adam optimization algorithm.
/// Reference: https://arxiv.org/abs/1412.6980
///
/// Keeps the moving averages (moments) of every parameter it has updated,
/// keyed by the parameter's node.
#[derive(Debug, Clone)]
pub struct Adam {
    config: AdamConfig,
    t: u64,
    // (first moment, second moment)
    moments: HashMap<NodeId, (f64, f64)>,
}

impl Adam {
    /// Adam with learning rate `lr` and the usual defaults for the rest.
    pub fn new(lr: f64) -> Result<Self, ScalarGradError> {
        Self::with_config(AdamConfig {
            lr,
            ..Default::default()
        })
    }

    pub fn with_config(config: AdamConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        Ok(Adam {
            config,
            t: 0,
            moments: HashMap::new(),
        })
    }

    pub fn config(&self) -> AdamConfig {
        self.config
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.t
    }
}

impl Optimizer for Adam {
    fn step(&mut self, graph: &mut Graph, params: &[Parameter]) -> Result<(), ScalarGradError> {
        let grads = collect_grads(graph, params)?;
        let AdamConfig {
            lr,
            beta1,
            beta2,
            epsilon,
        } = self.config;

        self.t += 1;
        let t = i32::try_from(self.t).unwrap_or(i32::MAX);
        let bias_correction1 = 1.0 - beta1.powi(t);
        let bias_correction2 = 1.0 - beta2.powi(t);

        for (param, grad) in params.iter().zip(grads) {
            let (m, v) = self.moments.entry(param.id()).or_insert((0.0, 0.0));
            *m = beta1 * *m + (1.0 - beta1) * grad;
            *v = beta2 * *v + (1.0 - beta2) * grad * grad;
            let m_hat = *m / bias_correction1;
            let v_hat = *v / bias_correction2;

            let value = param.data(graph)? - lr * m_hat / (v_hat.sqrt() + epsilon);
            param.set_data(graph, value)?;
        }
        log::debug!("Adam step {}: {} parameters", self.t, params.len());
        Ok(())
    }
}
