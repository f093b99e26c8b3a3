use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;

/// Slope used for non-positive inputs when none is given.
pub const DEFAULT_LEAKY_RELU_ALPHA: f64 = 0.01;

/// 1 for a strictly positive input, `alpha` otherwise (including exactly 0).
pub(crate) fn leaky_relu_backward(input: f64, alpha: f64) -> f64 {
    if input > 0.0 {
        1.0
    } else {
        alpha
    }
}

/// Leaky rectified linear unit: `a` if `a > 0`, else `alpha * a`.
pub fn leaky_relu_op(graph: &mut Graph, a: NodeId, alpha: f64) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(
        graph,
        a,
        |x| if x > 0.0 { x } else { alpha * x },
        Op::LeakyRelu(alpha),
        "leaky_relu",
    )
}
