use crate::autograd::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    /// An operation received an operand it cannot use: a node handle that is
    /// not live in the graph, a node where a constant was required, or a
    /// scalar that has no `f64` representation.
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Unsupported activation function '{0}'")]
    UnsupportedActivation(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ScalarGradError {
    pub(crate) fn invalid_operand(operation: &str, reason: impl Into<String>) -> Self {
        ScalarGradError::InvalidOperand {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn dead_node(operation: &str, id: NodeId) -> Self {
        Self::invalid_operand(
            operation,
            format!("{id} is not a live node of this graph"),
        )
    }
}
