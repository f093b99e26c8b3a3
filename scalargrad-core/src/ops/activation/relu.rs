use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;

/// 1 for a strictly positive input, 0 otherwise (including exactly 0).
pub(crate) fn relu_backward(input: f64) -> f64 {
    if input > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Rectified linear unit: `max(0, a)`.
pub fn relu_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(
        graph,
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        Op::Relu,
        "relu",
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
