use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;

pub(crate) fn linear_backward() -> f64 {
    1.0
}

/// Identity as an explicit graph node.
pub fn linear_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(graph, a, |x| x, Op::Linear, "linear")
}
