use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::Operand;
use std::fmt;
use std::ops::Deref;

/// A leaf node marked as a learnable parameter of a Module.
///
/// Parameters live in the same graph as the expressions built from them and
/// survive [`Graph::release`] as long as they were created before the
/// checkpoint.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter(NodeId);

impl Parameter {
    /// Creates a new leaf holding `value`.
    pub fn new(graph: &mut Graph, value: f64) -> Self {
        Parameter(graph.leaf(value))
    }

    /// Creates a new labelled leaf holding `value`.
    pub fn with_label(graph: &mut Graph, value: f64, label: impl Into<String>) -> Self {
        Parameter(graph.leaf_with_label(value, label))
    }

    /// Wraps an existing leaf. Derived nodes cannot be trained.
    pub fn from_leaf(graph: &Graph, id: NodeId) -> Result<Self, ScalarGradError> {
        if graph.node(id)?.is_leaf() {
            Ok(Parameter(id))
        } else {
            Err(ScalarGradError::invalid_operand(
                "parameter",
                format!("{id} is not a leaf"),
            ))
        }
    }

    pub fn id(&self) -> NodeId {
        self.0
    }

    pub fn data(&self, graph: &Graph) -> Result<f64, ScalarGradError> {
        graph.data(self.0)
    }

    pub fn grad(&self, graph: &Graph) -> Result<f64, ScalarGradError> {
        graph.grad(self.0)
    }

    pub fn set_data(&self, graph: &mut Graph, value: f64) -> Result<(), ScalarGradError> {
        graph.set_data(self.0, value)
    }
}

// Allow using a Parameter wherever a NodeId is read.
impl Deref for Parameter {
    type Target = NodeId;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Parameter> for NodeId {
    fn from(param: Parameter) -> Self {
        param.0
    }
}

impl From<Parameter> for Operand {
    fn from(param: Parameter) -> Self {
        Operand::Node(param.0)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
