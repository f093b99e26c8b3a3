use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::{apply_binary_op, Operand};

// --- Backward ---

/// d(a + b)/da = 1, d(a + b)/db = 1.
pub(crate) fn add_backward() -> [f64; 2] {
    [1.0, 1.0]
}

// --- Forward ---

/// Adds two operands. Scalars are promoted to leaves.
pub fn add_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    apply_binary_op(graph, a.into(), b.into(), |a, b| a + b, Op::Add, "add")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
