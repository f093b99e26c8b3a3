//! # Activation Functions
//!
//! Unary non-linearities (plus the identity `linear`) applied to a single
//! node. Each one appends a node whose tag selects the matching derivative.
//!
//! ## Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html)
//! - [`sigmoid`](sigmoid/fn.sigmoid_op.html)
//! - [`relu`](relu/fn.relu_op.html)
//! - [`leaky_relu`](leaky_relu/fn.leaky_relu_op.html)
//! - [`exp`](exp/fn.exp_op.html)
//! - [`linear`](linear/fn.linear_op.html)

pub mod exp;
pub mod leaky_relu;
pub mod linear;
pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use exp::exp_op;
pub use leaky_relu::{leaky_relu_op, DEFAULT_LEAKY_RELU_ALPHA};
pub use linear::linear_op;
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
