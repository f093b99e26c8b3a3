use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;

/// d tanh(a)/da = 1 - tanh(a)^2, computed from the output.
pub(crate) fn tanh_backward(output: f64) -> f64 {
    1.0 - output * output
}

/// Hyperbolic tangent.
pub fn tanh_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(graph, a, f64::tanh, Op::Tanh, "tanh")
}
