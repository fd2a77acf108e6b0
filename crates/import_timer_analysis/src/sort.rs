use log::trace;
use std::cmp::Ordering;

use import_timer_core::{ImportNode, Result};

/// Reorders the children of every internal node by descending `total_time`.
///
/// Each level is sorted independently. The sort is stable, so siblings with
/// equal totals keep their input order. Requires [`calculate_total_time`] to
/// have run; a node without a total yields `MissingTotalTime`.
///
/// [`calculate_total_time`]: crate::calculate_total_time
pub fn sort_nodes_by_total_time(root: &mut ImportNode) -> Result<&mut ImportNode> {
    root.total_time()?;
    sort_node(root)?;
    Ok(root)
}

fn sort_node(node: &mut ImportNode) -> Result<()> {
    let Some(children) = node.children_mut() else {
        return Ok(());
    };

    // Validate before reordering so a missing total never gets a made-up key.
    for child in children.iter() {
        child.total_time()?;
    }
    children.sort_by(|a, b| b.total_time.partial_cmp(&a.total_time).unwrap_or(Ordering::Equal));

    for child in children.iter_mut() {
        sort_node(child)?;
    }
    trace!("Sorted children of '{}'", node.display_name());
    Ok(())
}
