use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;

/// d e^a/da = e^a, which is the output itself.
pub(crate) fn exp_backward(output: f64) -> f64 {
    output
}

/// Natural exponential. Overflow yields `inf`, not an error.
pub fn exp_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(graph, a, f64::exp, Op::Exp, "exp")
}
