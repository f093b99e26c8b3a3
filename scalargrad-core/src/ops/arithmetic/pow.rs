use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::{apply_unary_op, Operand};

// --- Backward ---

/// d(a^p)/da = p * a^(p - 1).
pub(crate) fn pow_backward(a: f64, exponent: f64) -> f64 {
    exponent * a.powf(exponent - 1.0)
}

// --- Forward ---

/// Raises `base` to a constant power.
///
/// Only constant exponents are differentiable here: passing a node as the
/// exponent fails with `InvalidOperand` before anything is allocated.
pub fn pow_op(
    graph: &mut Graph,
    base: NodeId,
    exponent: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(value) => value,
        Operand::Node(id) => {
            return Err(ScalarGradError::invalid_operand(
                "pow",
                format!("exponent must be a constant, got {id}"),
            ))
        }
    };
    apply_unary_op(graph, base, |a| a.powf(exponent), Op::Pow(exponent), "pow")
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
