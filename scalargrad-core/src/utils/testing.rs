use crate::autograd::{Graph, NodeId};
use approx::relative_eq;

/// Asserts that every `(node, gradient)` pair matches the gradient stored in
/// `graph` within `rel_tol`.
///
/// # Panics
/// When a node is not live in `graph` or a gradient differs.
pub fn check_grads_near(graph: &Graph, expected: &[(NodeId, f64)], rel_tol: f64) {
    for (position, &(id, expected_grad)) in expected.iter().enumerate() {
        let actual = match graph.grad(id) {
            Ok(grad) => grad,
            Err(err) => panic!("Gradient #{position} unavailable: {err}"),
        };
        assert!(
            relative_eq!(actual, expected_grad, epsilon = 1e-12, max_relative = rel_tol),
            "Gradient mismatch for {id}: expected {expected_grad}, got {actual}"
        );
    }
}

/// Asserts that two slices hold the same values within `rel_tol`.
pub fn assert_slices_near(actual: &[f64], expected: &[f64], rel_tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Length mismatch: expected {}, got {}",
        expected.len(),
        actual.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            relative_eq!(a, e, epsilon = 1e-12, max_relative = rel_tol),
            "Value mismatch at index {i}: expected {e}, got {a}"
        );
    }
}
