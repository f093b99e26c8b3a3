use super::*;
use crate::autograd::Op;
use crate::utils::testing::check_grads_near;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_unit(graph: &mut Graph, weights: &[f64], bias: f64, activation: Activation) -> Unit {
    let weights = weights.iter().map(|&w| Parameter::new(graph, w)).collect();
    let bias = Parameter::new(graph, bias);
    Unit::from_parameters(weights, bias, activation)
}

#[test]
fn test_unit_forward_linear() {
    let mut graph = Graph::new();
    let unit = fixed_unit(&mut graph, &[0.5, -2.0], 1.0, Activation::Linear);
    let x0 = graph.leaf(4.0);
    let x1 = graph.leaf(1.5);

    let out = unit.forward(&mut graph, &[x0, x1]).unwrap();
    assert_eq!(out.len(), 1);
    // 1 + 0.5 * 4 - 2 * 1.5
    assert_relative_eq!(graph.data(out[0]).unwrap(), 0.0);
    assert_eq!(graph.op(out[0]).unwrap(), Op::Linear);
}

#[test]
fn test_unit_gradients() {
    let mut graph = Graph::new();
    let unit = fixed_unit(&mut graph, &[0.3, 0.7], -0.1, Activation::Tanh);
    let x0 = graph.leaf(1.0);
    let x1 = graph.leaf(-2.0);
    let out = unit.output(&mut graph, &[x0, x1]).unwrap();
    graph.backward(out).unwrap();

    let z: f64 = -0.1 + 0.3 * 1.0 + 0.7 * -2.0;
    let local = 1.0 - z.tanh().powi(2);
    assert_relative_eq!(graph.data(out).unwrap(), z.tanh(), max_relative = 1e-12);
    let w = unit.weights();
    check_grads_near(
        &graph,
        &[
            (w[0].id(), local * 1.0),
            (w[1].id(), local * -2.0),
            (unit.bias().id(), local),
            (x0, local * 0.3),
            (x1, local * 0.7),
        ],
        1e-9,
    );
}

#[test]
fn test_unit_dimension_mismatch() {
    let mut graph = Graph::new();
    let unit = fixed_unit(&mut graph, &[1.0, 1.0, 1.0], 0.0, Activation::Relu);
    let x = graph.leaf(1.0);
    let before = graph.len();
    assert_eq!(
        unit.forward(&mut graph, &[x, x]),
        Err(ScalarGradError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(graph.len(), before);
}

#[test]
fn test_unit_parameters_order_and_names() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let unit = Unit::new(&mut graph, 3, Activation::Sigmoid, &Init::default(), &mut rng).unwrap();
    assert_eq!(unit.n_input(), 3);
    assert_eq!(unit.num_parameters(), 4);

    let params = unit.parameters();
    assert_eq!(params[3], unit.bias());
    let names: Vec<String> = unit.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["w0", "w1", "w2", "b"]);
    for p in params {
        let v = p.data(&graph).unwrap();
        assert!((-1.0..1.0).contains(&v));
    }
}

#[test]
fn test_unit_without_inputs_is_bias_only() {
    let mut graph = Graph::new();
    let unit = fixed_unit(&mut graph, &[], 0.4, Activation::Relu);
    let out = unit.output(&mut graph, &[]).unwrap();
    assert_eq!(graph.data(out).unwrap(), 0.4);
}
