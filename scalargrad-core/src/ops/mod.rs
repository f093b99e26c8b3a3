//! # Primitive Operations (`ops`)
//!
//! The fixed set of differentiable scalar operations. Each operation lives in
//! its own file and provides:
//!
//! - a forward function `xxx_op(graph, ...)` that validates its operands,
//!   computes the output value eagerly and appends the result node tagged with
//!   the matching [`Op`](crate::autograd::Op);
//! - a `xxx_backward` function with the local-derivative formula, called by
//!   [`Op::local_gradients`](crate::autograd::Op::local_gradients) during
//!   propagation.
//!
//! `neg`, `sub` and `div` are composites built from `mul`, `add` and `pow`.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: tanh, sigmoid, relu, leaky_relu, exp, linear.

pub mod activation;
pub mod arithmetic;

use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Input of a binary operation: an existing node or a plain number that gets
/// promoted to a fresh leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f64),
}

impl Operand {
    /// Builds a scalar operand from any primitive number.
    ///
    /// Fails with `InvalidOperand` when the value has no `f64` representation.
    /// The std primitives always convert; the failure comes from other
    /// `ToPrimitive` types.
    pub fn scalar<T: ToPrimitive + Debug>(value: T) -> Result<Self, ScalarGradError> {
        value.to_f64().map(Operand::Scalar).ok_or_else(|| {
            ScalarGradError::invalid_operand(
                "scalar",
                format!("{value:?} cannot be represented as a real number"),
            )
        })
    }
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

// Rounds to the nearest f64 above 2^53.
impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Scalar(value as f64)
    }
}

/// Checks that a node operand is alive in `graph`. Scalars always pass.
pub(crate) fn check_operand(
    graph: &Graph,
    operation: &str,
    operand: Operand,
) -> Result<(), ScalarGradError> {
    match operand {
        Operand::Node(id) => graph.check(operation, id).map(|_| ()),
        Operand::Scalar(_) => Ok(()),
    }
}

/// Turns a checked operand into a node, promoting scalars to leaves.
fn promote(graph: &mut Graph, operand: Operand) -> NodeId {
    match operand {
        Operand::Node(id) => id,
        Operand::Scalar(value) => graph.leaf(value),
    }
}

/// Validates both operands, then promotes them. Nothing is allocated when
/// either operand is invalid.
pub(crate) fn resolve_operands(
    graph: &mut Graph,
    operation: &str,
    a: Operand,
    b: Operand,
) -> Result<(NodeId, NodeId), ScalarGradError> {
    check_operand(graph, operation, a)?;
    check_operand(graph, operation, b)?;
    let a = promote(graph, a);
    let b = promote(graph, b);
    Ok((a, b))
}

/// Validates a single operand, then promotes it.
pub(crate) fn resolve_operand(
    graph: &mut Graph,
    operation: &str,
    a: Operand,
) -> Result<NodeId, ScalarGradError> {
    check_operand(graph, operation, a)?;
    Ok(promote(graph, a))
}

/// Applies a unary operation to a node.
///
/// Handles operand validation, the forward computation and the creation of
/// the tagged output node.
///
/// # Arguments
/// * `graph`: The graph owning `a`.
/// * `a`: The input node.
/// * `forward`: Forward formula.
/// * `op`: Tag installed on the output node; selects the backward rule.
/// * `op_name`: Name of the operation for error messages.
pub(crate) fn apply_unary_op<F>(
    graph: &mut Graph,
    a: NodeId,
    forward: F,
    op: Op,
    op_name: &str,
) -> Result<NodeId, ScalarGradError>
where
    F: Fn(f64) -> f64,
{
    graph.check(op_name, a)?;
    let output = forward(graph.data(a)?);
    Ok(graph.push(output, op, vec![a]))
}

/// Applies a binary operation to two operands, promoting scalars to leaves.
pub(crate) fn apply_binary_op<F>(
    graph: &mut Graph,
    a: Operand,
    b: Operand,
    forward: F,
    op: Op,
    op_name: &str,
) -> Result<NodeId, ScalarGradError>
where
    F: Fn(f64, f64) -> f64,
{
    let (a, b) = resolve_operands(graph, op_name, a, b)?;
    let output = forward(graph.data(a)?, graph.data(b)?);
    Ok(graph.push(output, op, vec![a, b]))
}
