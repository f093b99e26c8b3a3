//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine. Every value is a
//! node in an arena-backed computation graph ([`Graph`]); operations build new
//! nodes eagerly and [`Graph::backward`] propagates gradients from one output
//! to everything it depends on.
//!
//! Two ways to drive the engine:
//! - the [`Graph`] API with [`NodeId`] handles and fallible operations
//!   (`graph.mul(a, 2.0)?`), used by the [`nn`] module;
//! - the [`Value`] handle, which wraps a shared graph and supports the usual
//!   operators (`&a * &b + 1.0`).

pub mod autograd;
pub mod ops;
pub mod value;

pub mod nn;
pub mod utils;

pub mod error;

pub use autograd::{Checkpoint, Graph, Node, NodeId, Op};
pub use error::ScalarGradError;
pub use ops::Operand;
pub use value::{SharedGraph, Value};
// Re-export traits required by public functions
pub use num_traits;
