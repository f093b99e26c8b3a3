use crate::{collect_grads, Optimizer};
use scalargrad_core::nn::Parameter;
use scalargrad_core::{Graph, NodeId, ScalarGradError};
use std::collections::HashMap;

/// Hyperparameters of [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    pub lr: f64,
    /// Momentum factor in `[0, 1)`; 0 disables momentum.
    pub momentum: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 0.01,
            momentum: 0.0,
        }
    }
}

impl SgdConfig {
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !(self.lr.is_finite() && self.lr > 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "learning rate must be positive and finite, got {}",
                self.lr
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

/// Implements stochastic gradient descent (optionally with momentum).
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`, or with momentum `mu`:
/// `v = mu * v + grad(p); p = p - lr * v`.
#[derive(Debug, Clone)]
pub struct Sgd {
    config: SgdConfig,
    // Velocity per parameter, created on first update.
    velocity: HashMap<NodeId, f64>,
}

impl Sgd {
    /// Plain SGD with learning rate `lr`.
    pub fn new(lr: f64) -> Result<Self, ScalarGradError> {
        Self::with_config(SgdConfig {
            lr,
            ..Default::default()
        })
    }

    pub fn with_config(config: SgdConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        Ok(Sgd {
            config,
            velocity: HashMap::new(),
        })
    }

    pub fn config(&self) -> SgdConfig {
        self.config
    }

    pub fn lr(&self) -> f64 {
        self.config.lr
    }

    /// Changes the learning rate, e.g. for a decay schedule.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        let config = SgdConfig { lr, ..self.config };
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph, params: &[Parameter]) -> Result<(), ScalarGradError> {
        let grads = collect_grads(graph, params)?;
        let SgdConfig { lr, momentum } = self.config;

        for (param, grad) in params.iter().zip(grads) {
            let update = if momentum > 0.0 {
                let v = self.velocity.entry(param.id()).or_insert(0.0);
                *v = momentum * *v + grad;
                *v
            } else {
                grad
            };
            let value = param.data(graph)? - lr * update;
            param.set_data(graph, value)?;
        }
        log::debug!("SGD step: {} parameters, lr {}", params.len(), lr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params_with_grads(graph: &mut Graph, values: &[(f64, f64)]) -> Vec<Parameter> {
        // loss = sum(g_i * p_i), so dloss/dp_i = g_i
        let params: Vec<Parameter> = values.iter().map(|&(v, _)| Parameter::new(graph, v)).collect();
        let mut terms = Vec::new();
        for (p, &(_, g)) in params.iter().zip(values) {
            terms.push(graph.mul(*p, g).unwrap());
        }
        let mut loss = terms[0];
        for &t in &terms[1..] {
            loss = graph.add(loss, t).unwrap();
        }
        graph.backward(loss).unwrap();
        params
    }

    #[test]
    fn test_sgd_step() {
        let mut graph = Graph::new();
        let params = params_with_grads(&mut graph, &[(1.0, 10.0), (2.0, -20.0), (5.0, 0.0)]);
        let mut optim = Sgd::new(0.1).unwrap();
        optim.step(&mut graph, &params).unwrap();

        assert_relative_eq!(params[0].data(&graph).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(params[1].data(&graph).unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(params[2].data(&graph).unwrap(), 5.0);
        // step leaves gradients alone
        assert_eq!(params[0].grad(&graph).unwrap(), 10.0);
    }

    #[test]
    fn test_sgd_zero_grad() {
        let mut graph = Graph::new();
        let params = params_with_grads(&mut graph, &[(1.0, 0.1), (2.0, 0.2)]);
        let optim = Sgd::new(0.1).unwrap();
        optim.zero_grad(&mut graph, &params).unwrap();
        assert!(params.iter().all(|p| p.grad(&graph).unwrap() == 0.0));
    }

    #[test]
    fn test_sgd_momentum_accumulates_velocity() {
        let mut graph = Graph::new();
        let params = params_with_grads(&mut graph, &[(0.0, 1.0)]);
        let mut optim = Sgd::with_config(SgdConfig {
            lr: 0.5,
            momentum: 0.9,
        })
        .unwrap();

        // v1 = 1, p = -0.5; v2 = 0.9 + 1 = 1.9, p = -0.5 - 0.95
        optim.step(&mut graph, &params).unwrap();
        assert_relative_eq!(params[0].data(&graph).unwrap(), -0.5);
        optim.step(&mut graph, &params).unwrap();
        assert_relative_eq!(params[0].data(&graph).unwrap(), -1.45, max_relative = 1e-12);
    }

    #[test]
    fn test_sgd_step_is_all_or_nothing() {
        let mut graph = Graph::new();
        let mut other = Graph::new();
        let params = params_with_grads(&mut graph, &[(1.0, 1.0)]);
        let foreign = Parameter::new(&mut other, 3.0);
        let mut optim = Sgd::new(0.1).unwrap();

        let result = optim.step(&mut graph, &[params[0], foreign]);
        assert!(matches!(result, Err(ScalarGradError::InvalidOperand { .. })));
        assert_eq!(params[0].data(&graph).unwrap(), 1.0);
    }

    #[test]
    fn test_sgd_config_validation() {
        assert!(SgdConfig::default().validate().is_ok());
        for (lr, momentum) in [(0.0, 0.0), (-0.1, 0.0), (f64::NAN, 0.0), (0.1, 1.0), (0.1, -0.2)] {
            assert!(
                matches!(
                    Sgd::with_config(SgdConfig { lr, momentum }),
                    Err(ScalarGradError::InvalidConfiguration(_))
                ),
                "lr {lr}, momentum {momentum} should be rejected"
            );
        }
        let mut optim = Sgd::new(0.1).unwrap();
        assert!(optim.set_lr(-1.0).is_err());
        assert_eq!(optim.lr(), 0.1);
        optim.set_lr(0.05).unwrap();
        assert_eq!(optim.config().lr, 0.05);
    }
}
