use import_timer_core::ImportNode;

/// root -> [A (0.1), B (0.5) -> [C (0.2)]]
///
/// `C` is an internal frame with no children so that it is eligible for
/// threshold reporting.
pub(crate) fn scenario_tree() -> ImportNode {
    ImportNode::internal(
        "root",
        0.0,
        vec![
            ImportNode::internal("A", 0.1, vec![]),
            ImportNode::internal("B", 0.5, vec![ImportNode::internal("C", 0.2, vec![])]),
        ],
    )
}

pub(crate) fn names(nodes: &[ImportNode]) -> Vec<&str> {
    nodes.iter().map(ImportNode::display_name).collect()
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}
