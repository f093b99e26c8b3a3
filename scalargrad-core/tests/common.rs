use scalargrad_core::{Graph, SharedGraph, Value};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Fresh shared graph with one leaf per value.
#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> (SharedGraph, Vec<Value>) {
    let graph = Graph::shared();
    let leaves = values.iter().map(|&v| Value::new(&graph, v)).collect();
    (graph, leaves)
}

// Same relative tolerance check as `math.isclose` with only `rel_tol`.
#[allow(dead_code)]
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    a == b || (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}
