//! # Path Reconstruction
//!
//! Turns the predecessor chain left by the search into a waypoint [`Path`].

use super::node::{NodeId, NodePool};
use crate::path::Path;

/// Builds the start-to-goal path ending at `goal`.
///
/// Walks predecessor links from `goal` back to the node without a predecessor,
/// prepending each cell's representative position.
pub fn reconstruct_path(pool: &NodePool, goal: NodeId) -> Path {
    let mut path = Path::new();
    let mut current = Some(goal);
    while let Some(id) = current {
        let node = pool.get(id);
        path.push_front(node.cell.position());
        current = node.parent;
        debug_assert!(path.len() <= pool.len(), "predecessor chain contains a cycle");
    }
    path
}
