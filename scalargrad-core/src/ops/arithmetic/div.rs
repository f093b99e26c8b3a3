use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::{resolve_operands, Operand};

/// Divides `a` by `b`, built as `a * b^-1`.
///
/// A zero denominator is not an error: the result follows IEEE-754 and is
/// infinite or NaN, and so are the gradients flowing through it.
pub fn div_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let (a, b) = resolve_operands(graph, "div", a.into(), b.into())?;
    let reciprocal = pow_op(graph, b, -1.0)?;
    mul_op(graph, a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
