//! # Autograd
//!
//! The arena that owns every node ([`Graph`]), the node record itself
//! ([`Node`]), the operation tags that select each node's local-gradient rule
//! ([`Op`]) and the backward propagation pass.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
mod graph_methods;
pub mod node;

pub use backward_op::Op;
pub use graph::{Checkpoint, Graph};
pub use node::{Node, NodeId};
