use log::{debug, trace};

use import_timer_core::{ImportNode, Result};

use crate::types::HotPath;

/// Collects every path whose cumulative time exceeds `threshold`.
///
/// Depth-first, pre-order, from `root` (depth 0) down to `max_depth`
/// inclusive. Only internal frames are reported: descent stops at leaves.
/// A reported frame does not hide its descendants, so nested hot paths are
/// each reported on their own.
///
/// `threshold` is absolute, in seconds; see [`Threshold::resolve`] for
/// converting a share of the total.
///
/// [`Threshold::resolve`]: crate::Threshold::resolve
pub fn get_paths_above_threshold(
    root: &ImportNode,
    threshold: f64,
    max_depth: usize,
) -> Result<Vec<HotPath>> {
    debug!("Collecting paths above {:.6}s up to depth {}", threshold, max_depth);
    let mut results = Vec::new();
    let mut path = Vec::new();
    collect_paths(root, threshold, max_depth, 0, &mut path, &mut results)?;
    debug!("Found {} paths above threshold", results.len());
    Ok(results)
}

fn collect_paths(
    node: &ImportNode,
    threshold: f64,
    max_depth: usize,
    depth: usize,
    path: &mut Vec<String>,
    results: &mut Vec<HotPath>,
) -> Result<()> {
    if depth > max_depth {
        return Ok(());
    }
    let Some(children) = node.children() else {
        return Ok(());
    };

    path.push(node.name()?.to_string());
    let total = node.total_time()?;
    if total > threshold {
        trace!("Path {:?} exceeds threshold with {:.6}s", path, total);
        results.push(HotPath { path: path.clone(), total_time: total });
    }

    for child in children {
        collect_paths(child, threshold, max_depth, depth + 1, path, results)?;
    }
    path.pop();
    Ok(())
}
