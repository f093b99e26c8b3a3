use super::*;
use crate::nn::mse_loss;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_parameter_count() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &[], &mut rng).unwrap();
    // (3 + 1) * 4 + (4 + 1) * 4 + (4 + 1) * 1
    assert_eq!(mlp.num_parameters(), 41);
    assert_eq!(graph.len(), 41);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.n_input(), 3);
    assert_eq!(mlp.n_output(), 1);
}

#[test]
fn test_mlp_default_activations_are_linear() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&mut graph, 2, &[3, 2], &[], &mut rng).unwrap();
    assert!(mlp
        .layers()
        .iter()
        .all(|l| l.activation() == Activation::Linear));
}

#[test]
fn test_mlp_activation_count_mismatch() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = Mlp::new(&mut graph, 2, &[3, 1], &[Activation::Relu], &mut rng);
    assert!(matches!(
        result,
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
    assert!(graph.is_empty());
}

#[test]
fn test_mlp_forward_uses_layer_activations() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(21);
    let mlp = Mlp::new(
        &mut graph,
        2,
        &[4, 1],
        &[Activation::Relu, Activation::Sigmoid],
        &mut rng,
    )
    .unwrap();
    let x0 = graph.leaf(0.5);
    let x1 = graph.leaf(-1.0);
    let out = mlp.forward(&mut graph, &[x0, x1]).unwrap();
    assert_eq!(out.len(), 1);
    let y = graph.data(out[0]).unwrap();
    assert!(y > 0.0 && y < 1.0);

    assert_eq!(
        mlp.forward(&mut graph, &[x0]),
        Err(ScalarGradError::DimensionMismatch {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_mlp_named_parameters() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(4);
    let mlp = Mlp::new(&mut graph, 1, &[2, 1], &[], &mut rng).unwrap();
    let named = mlp.named_parameters();
    assert_eq!(named.len(), mlp.num_parameters());
    assert_eq!(named[0].0, "layer0.unit0.w0");
    assert_eq!(named.last().unwrap().0, "layer1.unit0.b");
    let ids: Vec<_> = named.iter().map(|(_, p)| *p).collect();
    assert_eq!(ids, mlp.parameters());
}

#[test]
fn test_mlp_every_parameter_receives_gradient() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(8);
    let mlp = Mlp::new(&mut graph, 2, &[3, 1], &[Activation::Tanh, Activation::Linear], &mut rng).unwrap();
    let x0 = graph.leaf(0.3);
    let x1 = graph.leaf(-0.7);
    let out = mlp.forward(&mut graph, &[x0, x1]).unwrap();
    let loss = mse_loss(&mut graph, &out, &[1.0]).unwrap();
    graph.backward(loss).unwrap();

    let with_grad = mlp
        .parameters()
        .iter()
        .filter(|p| p.grad(&graph).unwrap() != 0.0)
        .count();
    assert_eq!(with_grad, mlp.num_parameters());

    mlp.zero_grad(&mut graph).unwrap();
    assert!(mlp
        .parameters()
        .iter()
        .all(|p| p.grad(&graph).unwrap() == 0.0));
}

#[test]
fn test_mlp_construction_is_reproducible() {
    let build = || {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(99);
        let mlp = Mlp::new(&mut graph, 2, &[2, 1], &[], &mut rng).unwrap();
        let x0 = graph.leaf(1.0);
        let x1 = graph.leaf(2.0);
        let out = mlp.forward(&mut graph, &[x0, x1]).unwrap();
        graph.data(out[0]).unwrap()
    };
    assert_eq!(build(), build());
}
