use super::*;
use crate::utils::testing::check_grads_near;
use approx::assert_relative_eq;

#[test]
fn test_add_forward_and_backward() {
    let cases = [
        (2.0, 3.0, 5.0),
        (-1.0, 1.0, 0.0),
        (0.0, 0.0, 0.0),
        (1.5, 2.5, 4.0),
    ];
    for (a, b, expected) in cases {
        let mut graph = Graph::new();
        let va = graph.leaf(a);
        let vb = graph.leaf(b);
        let vc = add_op(&mut graph, va, vb).unwrap();
        assert_relative_eq!(graph.data(vc).unwrap(), expected, max_relative = 1e-9);

        graph.backward(vc).unwrap();
        check_grads_near(&graph, &[(va, 1.0), (vb, 1.0)], 1e-9);
    }
}

#[test]
fn test_add_scalar_promotes_leaf() {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = add_op(&mut graph, x, 3.0).unwrap();
    assert_eq!(graph.data(y).unwrap(), 5.0);
    assert_eq!(graph.op(y).unwrap(), Op::Add);

    let children = graph.children(y).unwrap().to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], x);
    assert_eq!(graph.op(children[1]).unwrap(), Op::Leaf);
    assert_eq!(graph.data(children[1]).unwrap(), 3.0);
}

#[test]
fn test_add_same_node_twice() {
    // y = x + x, dy/dx = 2
    let mut graph = Graph::new();
    let x = graph.leaf(4.0);
    let y = add_op(&mut graph, x, x).unwrap();
    graph.backward(y).unwrap();
    assert_relative_eq!(graph.grad(x).unwrap(), 2.0);
}

#[test]
fn test_add_leaves_operands_untouched() {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let _ = add_op(&mut graph, a, b).unwrap();
    assert_eq!(graph.grad(a).unwrap(), 0.0);
    assert_eq!(graph.grad(b).unwrap(), 0.0);
    assert_eq!(graph.data(a).unwrap(), 1.0);
}
