// src/nn/layers/mod.rs
// Fully connected building blocks, from a single unit up to a network.

pub mod layer;
pub mod mlp;
pub mod unit;

// Re-export key layer structs
pub use layer::Layer;
pub use mlp::Mlp;
pub use unit::Unit;
