//! Operator-friendly handle over a shared [`Graph`].
//!
//! A [`Value`] pairs a [`NodeId`] with the graph that owns it, so expressions
//! can be written with ordinary operators:
//!
//! ```
//! use scalargrad_core::{Graph, Value};
//!
//! let graph = Graph::shared();
//! let x = Value::new(&graph, 2.0);
//! let y = Value::new(&graph, 3.0);
//! let z = (&x + &y) * &x;
//! z.backward();
//! assert_eq!(z.data(), 10.0);
//! assert_eq!(x.grad(), 7.0);
//! assert_eq!(y.grad(), 2.0);
//! ```
//!
//! Operators cannot return a `Result`. Combining values from two different
//! graphs, or using a value whose node was dropped by
//! [`Graph::release`], panics with the `InvalidOperand` message the
//! [`Graph`] API would have returned.

use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, sub_op};
use crate::ops::Operand;
use std::cell::RefCell;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

/// A graph shared between [`Value`] handles.
pub type SharedGraph = Rc<RefCell<Graph>>;

impl Graph {
    /// Creates an empty graph ready to be shared between [`Value`]s.
    pub fn shared() -> SharedGraph {
        Rc::new(RefCell::new(Graph::new()))
    }
}

/// Handle to a scalar node of a [`SharedGraph`].
///
/// Cloning a `Value` clones the handle, not the node.
#[derive(Clone)]
pub struct Value {
    graph: SharedGraph,
    id: NodeId,
}

fn or_panic<T>(result: Result<T, ScalarGradError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl Value {
    /// Creates a leaf in `graph`.
    pub fn new(graph: &SharedGraph, data: f64) -> Self {
        let id = graph.borrow_mut().leaf(data);
        Value {
            graph: Rc::clone(graph),
            id,
        }
    }

    /// Creates a labelled leaf in `graph`.
    pub fn with_label(graph: &SharedGraph, data: f64, label: impl Into<String>) -> Self {
        let id = graph.borrow_mut().leaf_with_label(data, label);
        Value {
            graph: Rc::clone(graph),
            id,
        }
    }

    /// Wraps an existing node of `graph`.
    pub fn from_node(graph: &SharedGraph, id: NodeId) -> Result<Self, ScalarGradError> {
        graph.borrow().check("from_node", id)?;
        Ok(Value {
            graph: Rc::clone(graph),
            id,
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &SharedGraph {
        &self.graph
    }

    /// # Panics
    /// If the node was released.
    pub fn data(&self) -> f64 {
        or_panic(self.graph.borrow().data(self.id))
    }

    /// # Panics
    /// If the node was released.
    pub fn grad(&self) -> f64 {
        or_panic(self.graph.borrow().grad(self.id))
    }

    /// # Panics
    /// If the node was released.
    pub fn op(&self) -> Op {
        or_panic(self.graph.borrow().op(self.id))
    }

    /// # Panics
    /// If the node was released.
    pub fn label(&self) -> Option<String> {
        or_panic(self.graph.borrow().label(self.id)).map(str::to_string)
    }

    /// The direct inputs of this value.
    ///
    /// # Panics
    /// If the node was released.
    pub fn children(&self) -> Vec<Value> {
        let graph = self.graph.borrow();
        or_panic(graph.children(self.id))
            .iter()
            .map(|&id| Value {
                graph: Rc::clone(&self.graph),
                id,
            })
            .collect()
    }

    fn wrap(&self, id: NodeId) -> Value {
        Value {
            graph: Rc::clone(&self.graph),
            id,
        }
    }

    fn unary<F>(&self, f: F) -> Value
    where
        F: FnOnce(&mut Graph, NodeId) -> Result<NodeId, ScalarGradError>,
    {
        let id = {
            let mut graph = self.graph.borrow_mut();
            or_panic(f(&mut *graph, self.id))
        };
        self.wrap(id)
    }

    fn combine<F>(graph: &SharedGraph, a: Operand, b: Operand, f: F) -> Value
    where
        F: FnOnce(&mut Graph, Operand, Operand) -> Result<NodeId, ScalarGradError>,
    {
        let id = {
            let mut shared = graph.borrow_mut();
            or_panic(f(&mut *shared, a, b))
        };
        Value {
            graph: Rc::clone(graph),
            id,
        }
    }

    /// `self ^ exponent` for a constant exponent.
    ///
    /// # Panics
    /// If the node was released.
    pub fn pow(&self, exponent: f64) -> Value {
        self.unary(|graph, id| graph.pow(id, exponent))
    }

    /// # Panics
    /// If the node was released.
    pub fn tanh(&self) -> Value {
        self.unary(Graph::tanh)
    }

    /// # Panics
    /// If the node was released.
    pub fn sigmoid(&self) -> Value {
        self.unary(Graph::sigmoid)
    }

    /// # Panics
    /// If the node was released.
    pub fn relu(&self) -> Value {
        self.unary(Graph::relu)
    }

    /// # Panics
    /// If the node was released.
    pub fn leaky_relu(&self, alpha: f64) -> Value {
        self.unary(|graph, id| graph.leaky_relu(id, alpha))
    }

    /// # Panics
    /// If the node was released.
    pub fn exp(&self) -> Value {
        self.unary(Graph::exp)
    }

    /// # Panics
    /// If the node was released.
    pub fn linear(&self) -> Value {
        self.unary(Graph::linear)
    }

    /// Propagates gradients from this value; see [`Graph::backward`].
    ///
    /// # Panics
    /// If the node was released.
    pub fn backward(&self) {
        or_panic(self.graph.borrow_mut().backward(self.id))
    }

    /// Resets the gradient of this value and everything it depends on.
    ///
    /// # Panics
    /// If the node was released.
    pub fn zero_grad(&self) {
        or_panic(self.graph.borrow_mut().zero_grad(self.id))
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.id)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.borrow().node(self.id) {
            Ok(node) => write!(f, "Value(data={}, grad={})", node.data(), node.grad()),
            Err(_) => write!(f, "Value(<released>)"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph.borrow();
        let mut debug = f.debug_struct("Value");
        debug.field("id", &self.id);
        if let Ok(node) = graph.node(self.id) {
            debug
                .field("data", &node.data())
                .field("grad", &node.grad())
                .field("op", &node.op());
        }
        debug.finish()
    }
}

// std::ops for every combination of Value, &Value and f64.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                Value::combine(&self.graph, self.into(), rhs.into(), |g, a, b| $op_fn(g, a, b))
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self.$method(&rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                (&self).$method(rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                (&self).$method(&rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                Value::combine(&self.graph, self.into(), rhs.into(), |g, a, b| $op_fn(g, a, b))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                (&self).$method(rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                Value::combine(&rhs.graph, self.into(), rhs.into(), |g, a, b| $op_fn(g, a, b))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self.$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        self.unary(Graph::neg)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        -&self
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
