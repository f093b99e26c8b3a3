//! Fits a small network to a handful of points of sin(x).
//!
//! Run with `RUST_LOG=info cargo run -p scalargrad-optim --example train_mlp`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{mse_loss, MlpConfig, Module};
use scalargrad_core::{Graph, ScalarGradError};
use scalargrad_optim::{Optimizer, Sgd, SgdConfig};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let data: Vec<(f64, f64)> = (0..16)
        .map(|i| {
            let x = -3.0 + 6.0 * f64::from(i) / 15.0;
            (x, x.sin())
        })
        .collect();

    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = MlpConfig::new(1, vec![16, 16, 1])
        .with_activation_names(&["tanh", "tanh", "linear"])?
        .build(&mut graph, &mut rng)?;
    let params = mlp.parameters();
    log::info!("Network with {} parameters", params.len());

    let mut optimizer = Sgd::with_config(SgdConfig {
        lr: 0.05,
        momentum: 0.9,
    })?;
    // Everything after this point is rebuilt each epoch.
    let checkpoint = graph.checkpoint();

    for epoch in 0..300 {
        let mut predictions = Vec::with_capacity(data.len());
        for &(x, _) in &data {
            let input = graph.leaf(x);
            predictions.extend(mlp.forward(&mut graph, &[input])?);
        }
        let targets: Vec<f64> = data.iter().map(|&(_, y)| y).collect();
        let loss = mse_loss(&mut graph, &predictions, &targets)?;

        optimizer.zero_grad(&mut graph, &params)?;
        graph.backward(loss)?;
        optimizer.step(&mut graph, &params)?;

        if epoch % 25 == 0 {
            log::info!("epoch {epoch:3}: loss {:.6} ({} nodes)", graph.data(loss)?, graph.len());
        }
        graph.release(checkpoint)?;
    }

    for &(x, y) in data.iter().step_by(4) {
        let input = graph.leaf(x);
        let output = mlp.forward(&mut graph, &[input])?;
        println!("x = {x:+.2}  target {y:+.4}  prediction {:+.4}", graph.data(output[0])?);
    }
    Ok(())
}
