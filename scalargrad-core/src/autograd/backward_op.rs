use crate::ops::activation::{exp, leaky_relu, linear, relu, sigmoid, tanh};
use crate::ops::arithmetic::{add, mul, pow};
use std::fmt;

/// Identifies the primitive that produced a node.
///
/// The tag carries the constants an operation needs at backward time (the
/// exponent of `Pow`, the slope of `LeakyRelu`). During propagation
/// [`Op::local_gradients`] turns the tag plus the forward values into the
/// partial derivatives of the node with respect to each of its children.
///
/// Composite operations (`neg`, `sub`, `div`) have no tag of their own: they
/// are built out of `Add`, `Mul` and `Pow` nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Tanh,
    Sigmoid,
    Relu,
    LeakyRelu(f64),
    Exp,
    Linear,
}

impl Op {
    /// Number of children a node with this tag has.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_)
            | Op::Tanh
            | Op::Sigmoid
            | Op::Relu
            | Op::LeakyRelu(_)
            | Op::Exp
            | Op::Linear => 1,
        }
    }

    /// Computes d(output)/d(child) for each child.
    ///
    /// `output` is the node's own forward value and `inputs` holds the forward
    /// values of its children in operand order (unused slots are zero). The
    /// returned array is indexed the same way.
    pub fn local_gradients(&self, output: f64, inputs: [f64; 2]) -> [f64; 2] {
        match *self {
            Op::Leaf => [0.0, 0.0],
            Op::Add => add::add_backward(),
            Op::Mul => mul::mul_backward(inputs[0], inputs[1]),
            Op::Pow(exponent) => [pow::pow_backward(inputs[0], exponent), 0.0],
            Op::Tanh => [tanh::tanh_backward(output), 0.0],
            Op::Sigmoid => [sigmoid::sigmoid_backward(output), 0.0],
            Op::Relu => [relu::relu_backward(inputs[0]), 0.0],
            Op::LeakyRelu(alpha) => [leaky_relu::leaky_relu_backward(inputs[0], alpha), 0.0],
            Op::Exp => [exp::exp_backward(output), 0.0],
            Op::Linear => [linear::linear_backward(), 0.0],
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "add"),
            Op::Mul => write!(f, "mul"),
            Op::Pow(exponent) => write!(f, "pow {exponent}"),
            Op::Tanh => write!(f, "tanh"),
            Op::Sigmoid => write!(f, "sigmoid"),
            Op::Relu => write!(f, "relu"),
            Op::LeakyRelu(_) => write!(f, "leaky_relu"),
            Op::Exp => write!(f, "exp"),
            Op::Linear => write!(f, "linear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Op;

    #[test]
    fn test_display_matches_operation_names() {
        assert_eq!(Op::Add.to_string(), "add");
        assert_eq!(Op::Pow(3.0).to_string(), "pow 3");
        assert_eq!(Op::Pow(-0.5).to_string(), "pow -0.5");
        assert_eq!(Op::LeakyRelu(0.1).to_string(), "leaky_relu");
    }

    #[test]
    fn test_arity() {
        assert_eq!(Op::Leaf.arity(), 0);
        assert_eq!(Op::Mul.arity(), 2);
        assert_eq!(Op::Sigmoid.arity(), 1);
    }

    #[test]
    fn test_leaf_has_no_local_gradients() {
        assert_eq!(Op::Leaf.local_gradients(4.0, [0.0, 0.0]), [0.0, 0.0]);
    }
}
