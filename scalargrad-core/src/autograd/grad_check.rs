use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+h): {value_plus:?}, f(x-h): {value_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("Graph error during gradient check: {0}")]
    GraphError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Builds `func` on a fresh graph with leaves holding `inputs` and returns the
/// output value together with the analytical gradient of every input.
pub fn analytical_gradient<F>(func: F, inputs: &[f64]) -> Result<(f64, Vec<f64>), ScalarGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&value| graph.leaf(value)).collect();
    let output = func(&mut graph, &leaves)?;
    graph.backward(output)?;
    let grads = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((graph.data(output)?, grads))
}

fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, ScalarGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&value| graph.leaf(value)).collect();
    let output = func(&mut graph, &leaves)?;
    graph.data(output)
}

/// Centered finite-difference estimate of the gradient of `func` at `inputs`.
pub fn numerical_gradient<F>(func: F, inputs: &[f64], epsilon: f64) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }
    let mut perturbed = inputs.to_vec();
    let mut grads = Vec::with_capacity(inputs.len());
    for i in 0..inputs.len() {
        perturbed[i] = inputs[i] + epsilon;
        let value_plus = evaluate(&func, &perturbed)?;
        perturbed[i] = inputs[i] - epsilon;
        let value_minus = evaluate(&func, &perturbed)?;
        perturbed[i] = inputs[i];

        let grad = (value_plus - value_minus) / (2.0 * epsilon);
        if !grad.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        grads.push(grad);
    }
    Ok(grads)
}

/// Checks analytical gradients against centered finite differences.
///
/// An input passes when the two estimates are within `abs_tolerance` of each
/// other, or within `rel_tolerance` relative to the larger magnitude.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let (_, analytical) = analytical_gradient(&func, inputs)?;
    let numerical = numerical_gradient(&func, inputs, epsilon)?;

    for (input_index, (&analytical, &numerical)) in analytical.iter().zip(&numerical).enumerate() {
        let close = relative_eq!(
            analytical,
            numerical,
            epsilon = abs_tolerance,
            max_relative = rel_tolerance
        );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical,
                numerical,
            });
        }
    }
    log::debug!("Gradient check passed for {} inputs", inputs.len());
    Ok(())
}
