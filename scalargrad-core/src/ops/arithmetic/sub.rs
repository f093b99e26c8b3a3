use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::{resolve_operands, Operand};

/// Subtracts `b` from `a`, built as `a + (-b)`.
///
/// Either side may be a scalar: `sub_op(graph, 2.0, x)` computes `2 - x`.
pub fn sub_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let (a, b) = resolve_operands(graph, "sub", a.into(), b.into())?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
