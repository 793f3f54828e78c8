//! # Search Regions
//!
//! Bounding boxes that limit which cells a search may generate.

use crate::config::DEFAULT_REGION_MARGIN;
use crate::grid::Cell;
use serde::{Deserialize, Serialize};

/// Inclusive axis-aligned box of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellBounds {
    pub min: Cell,
    pub max: Cell,
}

impl CellBounds {
    /// Creates the smallest box containing both corners, in any order.
    pub fn new(a: Cell, b: Cell) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the box grown by `margin` cells on every side, clamped to the `i32` range.
    pub fn grow(self, margin: i32) -> Self {
        let pad = Cell::new(margin, margin, margin);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Returns true if `cell` lies inside the box.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x)
            && (self.min.y..=self.max.y).contains(&cell.y)
            && (self.min.z..=self.max.z).contains(&cell.z)
    }

    /// Number of cells inside the box.
    pub fn volume(&self) -> u64 {
        let span = |lo: i32, hi: i32| (hi as i64 - lo as i64 + 1).max(0) as u64;
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
    }
}

/// Which cells a search is allowed to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchRegion {
    /// No spatial limit; only the expansion cap bounds the search
    Unbounded,
    /// The box spanning start and goal, grown by `margin` cells
    AroundEndpoints { margin: i32 },
    /// A fixed inclusive box of cells
    Fixed { min: Cell, max: Cell },
}

impl Default for SearchRegion {
    fn default() -> Self {
        SearchRegion::AroundEndpoints {
            margin: DEFAULT_REGION_MARGIN,
        }
    }
}

impl SearchRegion {
    /// Resolves the region for one search, or `None` if it is unbounded.
    ///
    /// On an open grid any route that leaves the start/goal box can be clamped back
    /// into it without getting longer, so `AroundEndpoints` never loses optimality.
    pub fn bounds_for(&self, start: Cell, goal: Cell) -> Option<CellBounds> {
        match *self {
            SearchRegion::Unbounded => None,
            SearchRegion::AroundEndpoints { margin } => {
                Some(CellBounds::new(start, goal).grow(margin.max(0)))
            }
            SearchRegion::Fixed { min, max } => Some(CellBounds::new(min, max)),
        }
    }
}
