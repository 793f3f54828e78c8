//! # Search Module
//!
//! A* route search over the 26-connected unit grid.
//!
//! Start and goal positions are quantized onto cells, the search expands cells in
//! order of `g + h` using Euclidean edge costs and the Euclidean heuristic, and the
//! winning predecessor chain is turned into a waypoint [`Path`]. Every search creates
//! its own node pool and open/closed sets and drops them once the path is built.
//!
//! The grid is unbounded, so each search is limited by an expansion cap and,
//! optionally, a [`SearchRegion`]. Running into either limit yields an empty path.

pub mod frontier;
pub mod node;
pub mod reconstruct;
pub mod region;

pub use frontier::*;
pub use node::*;
pub use reconstruct::*;
pub use region::*;

use crate::config::DEFAULT_MAX_EXPANSIONS;
use crate::grid::{edge_cost, heuristic, Cell};
use crate::path::Path;
use crate::{GridwalkError, GridwalkResult};
use log::{debug, trace};
use macroquad::math::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration for route searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of cells finalized before the goal is declared unreachable
    pub max_expansions: usize,
    /// Spatial limit on generated cells
    pub region: SearchRegion,
    /// Record the order in which cells are expanded (debugging aid)
    pub record_expansions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            region: SearchRegion::default(),
            record_expansions: false,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration for tests: small cap, expansion order recorded.
    pub fn for_testing() -> Self {
        Self {
            max_expansions: 10_000,
            region: SearchRegion::default(),
            record_expansions: true,
        }
    }

    /// Sets the expansion cap.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Sets the search region.
    pub fn with_region(mut self, region: SearchRegion) -> Self {
        self.region = region;
        self
    }

    /// Checks that the configuration can terminate a search.
    pub fn validate(&self) -> GridwalkResult<()> {
        if self.max_expansions == 0 {
            return Err(GridwalkError::InvalidConfig(
                "max_expansions must be at least 1".to_string(),
            ));
        }
        match self.region {
            SearchRegion::AroundEndpoints { margin } if margin < 0 => {
                Err(GridwalkError::InvalidConfig(format!(
                    "region margin must not be negative, got {}",
                    margin
                )))
            }
            _ => Ok(()),
        }
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// The goal cell was reached
    Found,
    /// Every reachable cell was expanded without reaching the goal
    Exhausted,
    /// The expansion cap was hit first
    ExpansionCapReached,
    /// Start or goal lies outside the search region
    OutsideRegion,
}

/// Outcome of one search, including statistics for logging and debugging.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Waypoints from start to goal, empty unless `status` is `Found`
    pub path: Path,
    /// How the search ended
    pub status: SearchStatus,
    /// Quantized start cell
    pub start: Cell,
    /// Quantized goal cell
    pub goal: Cell,
    /// Number of cells finalized
    pub nodes_expanded: usize,
    /// Total route cost, when found
    pub cost: Option<f64>,
    /// Expanded cells in order, when `record_expansions` is enabled
    pub expansion_order: Vec<Cell>,
}

impl SearchResult {
    fn failed(status: SearchStatus, start: Cell, goal: Cell, nodes_expanded: usize) -> Self {
        Self {
            path: Path::new(),
            status,
            start,
            goal,
            nodes_expanded,
            cost: None,
            expansion_order: Vec::new(),
        }
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

/// A* path search over the unit grid.
///
/// # Examples
///
/// ```
/// use gridwalk::{PathSearch, Vec3};
///
/// let search = PathSearch::with_defaults();
/// let path = search.find_path(Vec3::new(2.5, 0.0, 2.5), Vec3::ZERO);
///
/// assert_eq!(path.front(), Some(Vec3::new(2.0, 0.0, 2.0)));
/// assert_eq!(path.back(), Some(Vec3::ZERO));
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    config: SearchConfig,
}

impl PathSearch {
    /// Creates a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Creates a search with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SearchConfig::default())
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds the lowest-cost path between two world positions.
    ///
    /// Returns an empty path when the goal is unreachable within the search limits.
    pub fn find_path(&self, start: Vec3, goal: Vec3) -> Path {
        self.search(start, goal).path
    }

    /// Searches between two world positions, returning the path and statistics.
    pub fn search(&self, start: Vec3, goal: Vec3) -> SearchResult {
        self.search_cells(Cell::from_world(start), Cell::from_world(goal))
    }

    /// Searches between two cells.
    pub fn search_cells(&self, start: Cell, goal: Cell) -> SearchResult {
        trace!("[search] find_path: start={} goal={}", start, goal);

        let bounds = self.config.region.bounds_for(start, goal);
        if let Some(bounds) = bounds {
            if !bounds.contains(start) || !bounds.contains(goal) {
                debug!(
                    "[search] FAILED: OutsideRegion - start {} or goal {} outside {:?}",
                    start, goal, bounds
                );
                return SearchResult::failed(SearchStatus::OutsideRegion, start, goal, 0);
            }
        }

        let mut pool = NodePool::new();
        let mut open_set = OpenSet::new();
        let mut closed_set = ClosedSet::new();
        let mut expansion_order = Vec::new();

        open_set.insert_or_improve(&mut pool, start, 0.0, heuristic(start, goal), None);

        let mut nodes_expanded = 0;

        while let Some(current_id) = open_set.pop_lowest(&pool) {
            let current = *pool.get(current_id);
            debug_assert!(!closed_set.contains(&current.cell));
            closed_set.insert(current.cell);
            nodes_expanded += 1;
            if self.config.record_expansions {
                expansion_order.push(current.cell);
            }

            // Goal reached
            if current.cell == goal {
                let path = reconstruct_path(&pool, current_id);
                debug!(
                    "[search] found {} waypoints, cost {:.3}, {} nodes expanded",
                    path.len(),
                    current.g,
                    nodes_expanded
                );
                return SearchResult {
                    path,
                    status: SearchStatus::Found,
                    start,
                    goal,
                    nodes_expanded,
                    cost: Some(current.g),
                    expansion_order,
                };
            }

            if nodes_expanded >= self.config.max_expansions {
                debug!(
                    "[search] FAILED: ExpansionCapReached ({} nodes)",
                    nodes_expanded
                );
                let mut result = SearchResult::failed(
                    SearchStatus::ExpansionCapReached,
                    start,
                    goal,
                    nodes_expanded,
                );
                result.expansion_order = expansion_order;
                return result;
            }

            for neighbor in current.cell.neighbors() {
                if closed_set.contains(&neighbor) {
                    continue;
                }
                if let Some(bounds) = bounds {
                    if !bounds.contains(neighbor) {
                        continue;
                    }
                }

                let tentative_g = current.g + edge_cost(current.cell, neighbor);
                open_set.insert_or_improve(
                    &mut pool,
                    neighbor,
                    tentative_g,
                    heuristic(neighbor, goal),
                    Some(current_id),
                );
            }
        }

        debug!(
            "[search] FAILED: Exhausted after expanding {} nodes",
            nodes_expanded
        );
        let mut result =
            SearchResult::failed(SearchStatus::Exhausted, start, goal, nodes_expanded);
        result.expansion_order = expansion_order;
        result
    }
}
