use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;

/// d sigmoid(a)/da = s (1 - s) with `s` the output.
pub(crate) fn sigmoid_backward(output: f64) -> f64 {
    output * (1.0 - output)
}

/// Logistic sigmoid `1 / (1 + e^-a)`.
pub fn sigmoid_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(
        graph,
        a,
        |x| 1.0 / (1.0 + (-x).exp()),
        Op::Sigmoid,
        "sigmoid",
    )
}
