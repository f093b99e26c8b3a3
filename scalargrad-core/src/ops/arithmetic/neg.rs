use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_op;

/// Negates a node. Built as `a * -1`, so the result is a `Mul` node.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    graph.check("neg", a)?;
    mul_op(graph, a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
