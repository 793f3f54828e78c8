//! # Search Frontier
//!
//! The open and closed sets of the A* search.
//!
//! The open set is a binary heap keyed on `f = g + h` plus a membership map from cell
//! to node. Improving a queued cell updates its node in place and pushes a fresh heap
//! entry; the outdated entry is recognized by its revision and skipped when popped.

use super::node::{NodeId, NodePool, SearchNode};
use crate::grid::Cell;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Heap entry for one queued node.
#[derive(Debug, Clone)]
struct OpenEntry {
    priority: f64,
    sequence: u64,
    node: NodeId,
    revision: u32,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap; among equal
        // priorities the earliest insertion pops first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Cells discovered but not yet finalized, ordered by total priority.
#[derive(Debug, Clone, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    members: HashMap<Cell, NodeId>,
    next_sequence: u64,
}

impl OpenSet {
    /// Creates an empty open set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells currently queued.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no cells are queued.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if `cell` is queued.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.members.contains_key(cell)
    }

    /// Queues `cell`, or lowers its cost if it is already queued with a worse `g`.
    ///
    /// Returns the node id when the cell was inserted or improved, `None` when the
    /// existing entry was at least as good.
    pub fn insert_or_improve(
        &mut self,
        pool: &mut NodePool,
        cell: Cell,
        g: f64,
        h: f64,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        let id = match self.members.get(&cell) {
            Some(&id) => {
                let node = pool.get_mut(id);
                if g >= node.g {
                    return None;
                }
                node.g = g;
                node.h = h;
                node.parent = parent;
                node.revision += 1;
                id
            }
            None => {
                let id = pool.insert(SearchNode::new(cell, g, h, parent));
                self.members.insert(cell, id);
                id
            }
        };

        let node = pool.get(id);
        self.heap.push(OpenEntry {
            priority: node.f(),
            sequence: self.next_sequence,
            node: id,
            revision: node.revision,
        });
        self.next_sequence += 1;
        Some(id)
    }

    /// Removes and returns the queued node with the lowest `g + h`.
    pub fn pop_lowest(&mut self, pool: &NodePool) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let node = pool.get(entry.node);
            if node.revision != entry.revision {
                continue;
            }
            if self.members.remove(&node.cell).is_some() {
                return Some(entry.node);
            }
        }
        None
    }
}

/// Cells whose minimum cost has been finalized.
#[derive(Debug, Clone, Default)]
pub struct ClosedSet {
    cells: HashSet<Cell>,
}

impl ClosedSet {
    /// Creates an empty closed set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalizes `cell`. Returns false if it was already closed.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Returns true if `cell` has been finalized.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Number of finalized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if nothing has been finalized.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
