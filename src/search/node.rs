//! # Search Nodes
//!
//! Per-search node storage. Predecessor links are indices into the pool that owns
//! every node of one search invocation.

use crate::grid::Cell;

/// Index of a node within its [`NodePool`].
pub type NodeId = usize;

/// Bookkeeping for one cell during one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    /// The cell this node stands for
    pub cell: Cell,
    /// Accumulated cost from the start
    pub g: f64,
    /// Heuristic cost to the goal
    pub h: f64,
    /// Predecessor on the best known route, `None` for the start node
    pub parent: Option<NodeId>,
    /// Bumped whenever the node's cost improves, to detect stale frontier entries
    pub(crate) revision: u32,
}

impl SearchNode {
    /// Creates a node with the given costs and predecessor.
    pub fn new(cell: Cell, g: f64, h: f64, parent: Option<NodeId>) -> Self {
        Self {
            cell,
            g,
            h,
            parent,
            revision: 0,
        }
    }

    /// Total priority `g + h`.
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Owns every [`SearchNode`] created during a single search.
#[derive(Debug, Clone, Default)]
pub struct NodePool {
    nodes: Vec<SearchNode>,
}

impl NodePool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its id.
    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this pool.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no nodes have been created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
