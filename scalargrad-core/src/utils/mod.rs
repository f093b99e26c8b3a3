//! Helpers shared by the engine's own tests and by downstream crates.

pub mod testing;
