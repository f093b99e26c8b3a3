use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::{apply_binary_op, Operand};

// --- Backward ---

/// d(a * b)/da = b, d(a * b)/db = a.
pub(crate) fn mul_backward(a: f64, b: f64) -> [f64; 2] {
    [b, a]
}

// --- Forward ---

/// Multiplies two operands. Scalars are promoted to leaves.
pub fn mul_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    apply_binary_op(graph, a.into(), b.into(), |a, b| a * b, Op::Mul, "mul")
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
