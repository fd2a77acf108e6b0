use log::{debug, trace};
use std::collections::VecDeque;

use import_timer_core::{ImportNode, Result};

/// Separator between segments of a path string, e.g. `accelerate->torch`.
pub const PATH_SEPARATOR: &str = "->";

/// Returns the first chain of nodes matching `path_string`.
///
/// Each segment is searched breadth-first below the node matched by the
/// previous segment (the root for the first one), so segments do not have to
/// be direct parent/child pairs. A single name such as `torch` finds the
/// shallowest frame with that name anywhere in the tree.
///
/// # Returns
/// `Ok(Some(nodes))` with one node per segment, `Ok(None)` if any segment
/// cannot be matched, or `MalformedNode` if a scanned node has no name.
pub fn find_path_by_string<'a>(
    root: &'a ImportNode,
    path_string: &str,
) -> Result<Option<Vec<&'a ImportNode>>> {
    let segments: Vec<&str> = path_string.split(PATH_SEPARATOR).collect();
    debug!("Searching for path '{}' ({} segments)", path_string, segments.len());

    let mut anchor = root;
    let mut found = Vec::with_capacity(segments.len());

    for segment in segments {
        if anchor.is_leaf() {
            debug!("Cannot continue past leaf '{}' to '{}'", anchor.display_name(), segment);
            return Ok(None);
        }

        match find_first_descendant(anchor, segment)? {
            Some(node) => {
                trace!("Matched segment '{}' below '{}'", segment, anchor.display_name());
                found.push(node);
                anchor = node;
            }
            None => {
                debug!("Segment '{}' not found below '{}'", segment, anchor.display_name());
                return Ok(None);
            }
        }
    }

    Ok(Some(found))
}

/// Level-order search for the first descendant of `anchor` named `name`.
///
/// The children of each dequeued node are scanned in order before any of
/// them is expanded; `anchor` itself never matches.
pub fn find_first_descendant<'a>(
    anchor: &'a ImportNode,
    name: &str,
) -> Result<Option<&'a ImportNode>> {
    let mut queue: VecDeque<&'a ImportNode> = VecDeque::from([anchor]);

    while let Some(current) = queue.pop_front() {
        let Some(children) = current.children() else {
            continue;
        };
        for child in children {
            if child.name()? == name {
                return Ok(Some(child));
            }
        }
        queue.extend(children);
    }

    Ok(None)
}
