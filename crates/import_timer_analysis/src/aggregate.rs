use log::{debug, trace};

use import_timer_core::ImportNode;

/// Computes the cumulative time of every subtree and stores it on each node.
///
/// Post-order: a node's `total_time` is its own `value` plus the totals of
/// its children. Existing totals are overwritten, never read, so calling this
/// again on an unchanged tree yields the same values.
///
/// # Returns
/// The total time of `root`
pub fn calculate_total_time(root: &mut ImportNode) -> f64 {
    let total = aggregate_node(root);
    debug!("Aggregated total time {:.6}s for '{}'", total, root.display_name());
    total
}

fn aggregate_node(node: &mut ImportNode) -> f64 {
    let mut total = node.value;
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            total += aggregate_node(child);
        }
    }
    trace!("Node '{}' has total time {:.6}s", node.display_name(), total);
    node.total_time = Some(total);
    total
}
