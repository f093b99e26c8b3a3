// Graph methods for the primitive operations; each forwards to its `_op` function.

use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::activation::{
    exp_op, leaky_relu_op, linear_op, relu_op, sigmoid_op, tanh_op, DEFAULT_LEAKY_RELU_ALPHA,
};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::Operand;

impl Graph {
    pub fn add(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }

    pub fn sub(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }

    pub fn mul(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }

    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }

    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        neg_op(self, a)
    }

    /// `base ^ exponent`; the exponent must be a constant.
    pub fn pow(
        &mut self,
        base: NodeId,
        exponent: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        pow_op(self, base, exponent)
    }

    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        tanh_op(self, a)
    }

    pub fn sigmoid(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        sigmoid_op(self, a)
    }

    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        relu_op(self, a)
    }

    /// Leaky ReLU with slope `alpha` below zero.
    pub fn leaky_relu(&mut self, a: NodeId, alpha: f64) -> Result<NodeId, ScalarGradError> {
        leaky_relu_op(self, a, alpha)
    }

    /// Leaky ReLU with the default slope of 0.01.
    pub fn leaky_relu_default(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        leaky_relu_op(self, a, DEFAULT_LEAKY_RELU_ALPHA)
    }

    pub fn exp(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        exp_op(self, a)
    }

    pub fn linear(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        linear_op(self, a)
    }
}
