// src/nn/mod.rs
// Neural-network building blocks on top of the scalar graph.

pub mod activation;
pub mod config;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use activation::Activation;
pub use config::MlpConfig;
pub use init::{Init, InitSampler};
pub use layers::{Layer, Mlp, Unit};
pub use losses::{mse_loss, MseLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
