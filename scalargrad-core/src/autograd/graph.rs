use crate::autograd::backward_op::Op;
use crate::autograd::node::{Node, NodeId};
use crate::error::ScalarGradError;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

static GRAPH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Arena owning every node of a computation graph.
///
/// Nodes are appended in construction order, so a node's children always sit
/// at lower indices than the node itself and the arena is acyclic by
/// construction. Handles ([`NodeId`]) are plain indices tagged with the graph
/// identity and the epoch of allocation.
#[derive(Debug)]
pub struct Graph {
    id: usize,
    epoch: u32,
    nodes: Vec<Node>,
}

/// Marker returned by [`Graph::checkpoint`]; passing it to
/// [`Graph::release`] drops every node created after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    graph: usize,
    epoch: u32,
    len: usize,
}

impl Checkpoint {
    /// Number of nodes that survive a release to this checkpoint.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: GRAPH_COUNTER.fetch_add(1, Ordering::Relaxed),
            epoch: 0,
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes currently stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node holding `value`.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(value, Op::Leaf, Vec::new())
    }

    /// Creates a leaf node holding `value` with a debugging label.
    pub fn leaf_with_label(&mut self, value: f64, label: impl Into<String>) -> NodeId {
        let id = self.leaf(value);
        self.nodes[id.index].label = Some(label.into());
        id
    }

    /// Appends a node. Children must already be validated by the caller.
    pub(crate) fn push(&mut self, data: f64, op: Op, children: Vec<NodeId>) -> NodeId {
        debug_assert_eq!(op.arity(), children.len());
        let index = self.nodes.len();
        self.nodes.push(Node::new(data, op, children, self.epoch));
        NodeId {
            graph: self.id,
            epoch: self.epoch,
            index,
        }
    }

    fn id_at(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            epoch: self.nodes[index].epoch,
            index,
        }
    }

    /// Returns true when `id` refers to a node that is alive in this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.graph == self.id
            && self
                .nodes
                .get(id.index)
                .map_or(false, |node| node.epoch == id.epoch)
    }

    /// Validates `id` for `operation`, returning its arena index.
    pub(crate) fn check(&self, operation: &str, id: NodeId) -> Result<usize, ScalarGradError> {
        if self.contains(id) {
            Ok(id.index)
        } else {
            Err(ScalarGradError::dead_node(operation, id))
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarGradError> {
        let index = self.check("node", id)?;
        Ok(&self.nodes[index])
    }

    pub fn data(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.data)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn op(&self, id: NodeId) -> Result<Op, ScalarGradError> {
        Ok(self.node(id)?.op)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], ScalarGradError> {
        Ok(self.node(id)?.children())
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>, ScalarGradError> {
        Ok(self.node(id)?.label())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), ScalarGradError> {
        let index = self.check("set_label", id)?;
        self.nodes[index].label = Some(label.into());
        Ok(())
    }

    /// Overwrites the value of a leaf, e.g. a parameter update.
    ///
    /// Nodes derived from the leaf keep their old `data`; they are expected to
    /// be rebuilt by the next forward pass.
    pub fn set_data(&mut self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        let index = self.check("set_data", id)?;
        let node = &mut self.nodes[index];
        if !node.is_leaf() {
            return Err(ScalarGradError::invalid_operand(
                "set_data",
                format!("{id} is not a leaf (produced by {})", node.op),
            ));
        }
        node.data = value;
        Ok(())
    }

    /// Resets the gradient of a single node to zero.
    pub fn clear_grad(&mut self, id: NodeId) -> Result<(), ScalarGradError> {
        let index = self.check("clear_grad", id)?;
        self.nodes[index].grad = 0.0;
        Ok(())
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            graph: self.id,
            epoch: self.epoch,
            len: self.nodes.len(),
        }
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Handles to the dropped nodes become invalid (operations on them fail
    /// with `InvalidOperand`). Nodes created before the checkpoint keep their
    /// data, gradients and handles.
    pub fn release(&mut self, checkpoint: Checkpoint) -> Result<(), ScalarGradError> {
        let stale = checkpoint.graph != self.id
            || checkpoint.len > self.nodes.len()
            || (checkpoint.len > 0 && self.nodes[checkpoint.len - 1].epoch > checkpoint.epoch);
        if stale {
            return Err(ScalarGradError::invalid_operand(
                "release",
                "checkpoint does not belong to the current state of this graph",
            ));
        }
        let dropped = self.nodes.len() - checkpoint.len;
        self.nodes.truncate(checkpoint.len);
        self.epoch += 1;
        log::debug!(
            "Released {} nodes from graph {}, {} remain (epoch {})",
            dropped,
            self.id,
            self.nodes.len(),
            self.epoch
        );
        Ok(())
    }

    /// Post-order over the nodes reachable from `root`: every node appears
    /// after all of its children, `root` comes last.
    ///
    /// Uses an explicit stack so long chains cannot overflow the call stack.
    fn build_topo(&self, root: usize) -> Vec<usize> {
        let mut visited = HashSet::new();
        let mut sorted_list = Vec::new();
        let mut stack = vec![(root, 0usize)];
        visited.insert(root);

        while let Some((index, next_child)) = stack.pop() {
            match self.nodes[index].children.get(next_child) {
                Some(child) => {
                    stack.push((index, next_child + 1));
                    if visited.insert(child.index) {
                        stack.push((child.index, 0));
                    }
                }
                None => sorted_list.push(index),
            }
        }
        sorted_list
    }

    /// Handles of the nodes reachable from `root` in topological order
    /// (children first, `root` last).
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        let root_index = self.check("topological_order", root)?;
        Ok(self
            .build_topo(root_index)
            .into_iter()
            .map(|index| self.id_at(index))
            .collect())
    }

    /// Computes the gradient of `root` with respect to every node it depends on.
    ///
    /// The root's gradient is set to 1, then nodes are processed in reverse
    /// topological order so each node's gradient is complete before it is
    /// distributed to its children. Gradients are added to whatever the nodes
    /// already hold: calling `backward` twice without [`Graph::zero_grad`]
    /// accumulates.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        let root_index = self.check("backward", root)?;
        let sorted_list = self.build_topo(root_index);
        log::debug!(
            "backward from {}: {} reachable nodes",
            root,
            sorted_list.len()
        );

        let root_data = self.nodes[root_index].data;
        if !root_data.is_finite() {
            log::warn!(
                "backward started from a non-finite value ({}); gradients will not be finite",
                root_data
            );
        }
        self.nodes[root_index].grad = 1.0;

        for &index in sorted_list.iter().rev() {
            let node = &self.nodes[index];
            if node.is_leaf() {
                continue;
            }
            let upstream = node.grad;
            let mut inputs = [0.0; 2];
            for (slot, child) in inputs.iter_mut().zip(&node.children) {
                *slot = self.nodes[child.index].data;
            }
            let local = node.op.local_gradients(node.data, inputs);
            log::trace!(
                "node #{} ({}): upstream {} local {:?}",
                index,
                node.op,
                upstream,
                local
            );

            for slot in 0..self.nodes[index].children.len() {
                let child = self.nodes[index].children[slot].index;
                self.nodes[child].grad += upstream * local[slot];
            }
        }
        Ok(())
    }

    /// Sets the gradient of `root` and every node it depends on back to zero.
    pub fn zero_grad(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        let root_index = self.check("zero_grad", root)?;
        for index in self.build_topo(root_index) {
            self.nodes[index].grad = 0.0;
        }
        Ok(())
    }

    /// Sets the gradient of every node in the arena to zero.
    pub fn zero_grad_all(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
