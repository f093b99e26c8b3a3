use super::*;
use approx::assert_relative_eq;

#[test]
fn test_value_arithmetic_operators() {
    let graph = Graph::shared();
    let a = Value::new(&graph, -4.0);
    let b = Value::new(&graph, 2.0);

    assert_eq!((&a + &b).data(), -2.0);
    assert_eq!((&a - &b).data(), -6.0);
    assert_eq!((&a * &b).data(), -8.0);
    assert_eq!((&a / &b).data(), -2.0);
    assert_eq!((-&a).data(), 4.0);
    assert_eq!((&a + 1.0).data(), -3.0);
    assert_eq!((1.0 + &a).data(), -3.0);
    assert_eq!((3.0 * &b).data(), 6.0);
}

#[test]
fn test_reflected_subtraction_and_division() {
    let graph = Graph::shared();
    let x = Value::new(&graph, 5.0);

    let y = 2.0 - &x;
    assert_eq!(y.data(), -3.0);
    y.backward();
    assert_eq!(x.grad(), -1.0);

    x.zero_grad();
    let z = 10.0 / &x;
    assert_relative_eq!(z.data(), 2.0);
    z.backward();
    // d(10 / x)/dx = -10 / x^2
    assert_relative_eq!(x.grad(), -0.4, max_relative = 1e-12);
}

#[test]
fn test_owned_operands() {
    let graph = Graph::shared();
    let x = Value::new(&graph, 3.0);
    let y = x.clone() * x.clone() + x.clone();
    y.backward();
    assert_eq!(y.data(), 12.0);
    assert_eq!(x.grad(), 7.0);
}

#[test]
fn test_unary_methods() {
    let graph = Graph::shared();
    let x = Value::new(&graph, 0.5);

    assert_relative_eq!(x.tanh().data(), 0.5f64.tanh());
    assert_relative_eq!(x.sigmoid().data(), 1.0 / (1.0 + (-0.5f64).exp()));
    assert_relative_eq!(x.exp().data(), 0.5f64.exp());
    assert_eq!(x.relu().data(), 0.5);
    assert_eq!(x.linear().data(), 0.5);
    assert_eq!(x.pow(3.0).data(), 0.125);

    let n = Value::new(&graph, -2.0);
    assert_relative_eq!(n.leaky_relu(0.1).data(), -0.2);
    assert_eq!(n.relu().data(), 0.0);
}

#[test]
fn test_children_and_op() {
    let graph = Graph::shared();
    let a = Value::with_label(&graph, 2.0, "a");
    let b = Value::new(&graph, 3.0);
    let c = &a * &b;

    assert_eq!(c.op(), Op::Mul);
    assert_eq!(a.op(), Op::Leaf);
    assert_eq!(a.label(), Some("a".to_string()));
    let children = c.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].id(), a.id());
    assert_eq!(children[1].id(), b.id());
    assert!(a.children().is_empty());
}

#[test]
fn test_from_node_wraps_graph_nodes() {
    let graph = Graph::shared();
    let id = graph.borrow_mut().leaf(1.5);
    let value = Value::from_node(&graph, id).unwrap();
    assert_eq!(value.data(), 1.5);

    let other = Graph::shared();
    assert!(matches!(
        Value::from_node(&other, id),
        Err(ScalarGradError::InvalidOperand { .. })
    ));
}

#[test]
fn test_display_and_debug() {
    let graph = Graph::shared();
    let x = Value::new(&graph, 2.0);
    let y = &x * 3.0;
    y.backward();
    assert_eq!(x.to_string(), "Value(data=2, grad=3)");
    let debug = format!("{:?}", y);
    assert!(debug.contains("data: 6.0"));
    assert!(debug.contains("Mul"));
}

#[test]
#[should_panic(expected = "Invalid operand")]
fn test_mixing_graphs_panics() {
    let first = Graph::shared();
    let second = Graph::shared();
    let a = Value::new(&first, 1.0);
    let b = Value::new(&second, 2.0);
    let _ = &a + &b;
}

#[test]
#[should_panic(expected = "Invalid operand")]
fn test_released_value_panics() {
    let graph = Graph::shared();
    let checkpoint = graph.borrow().checkpoint();
    let x = Value::new(&graph, 1.0);
    graph.borrow_mut().release(checkpoint).unwrap();
    let _ = x.data();
}
