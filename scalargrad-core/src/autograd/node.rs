use crate::autograd::backward_op::Op;
use std::fmt;

/// Handle to a node stored in a [`Graph`](crate::autograd::Graph).
///
/// A handle is only meaningful for the graph that created it. Besides the
/// arena index it records the graph identity and the arena epoch in which the
/// node was allocated, so that handles from another graph, or handles whose
/// node was dropped by [`Graph::release`](crate::autograd::Graph::release),
/// are rejected instead of silently aliasing a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: usize,
    pub(crate) epoch: u32,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node #{} (graph {}, epoch {})",
            self.index, self.graph, self.epoch
        )
    }
}

/// A scalar node of the computation graph.
///
/// `data` is computed once when the node is built. `grad` starts at zero and
/// only accumulates during backward passes; it is never reset implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) children: Vec<NodeId>,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
    pub(crate) epoch: u32,
}

impl Node {
    pub(crate) fn new(data: f64, op: Op, children: Vec<NodeId>, epoch: u32) -> Self {
        Node {
            data,
            grad: 0.0,
            children,
            op,
            label: None,
            epoch,
        }
    }

    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    /// The direct inputs of this node, in operand order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
