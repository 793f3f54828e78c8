//! # Grid Module
//!
//! Discretization of continuous 3D space into a uniform grid of unit cells.
//!
//! This module holds the leaf pieces of route planning:
//! - Quantization of world positions onto cells (floor per axis)
//! - 26-connected neighbor expansion with Euclidean edge costs
//! - The Euclidean heuristic used by the search
//! - Chunk bounds for debug overlays around the agent

pub mod cell;
pub mod chunk;

pub use cell::*;
pub use chunk::*;

/// Cost of moving between two adjacent cells.
///
/// Equals the Euclidean distance between their representative positions, so an
/// axis-aligned move costs 1, a planar diagonal √2 and a full diagonal √3.
pub fn edge_cost(from: Cell, to: Cell) -> f64 {
    from.euclidean_distance(to)
}

/// Lower-bound estimate of the remaining cost from `cell` to `goal`.
///
/// Uses the true (square-rooted) distance. A squared distance would overstate the
/// remaining cost and the search would lose its optimality guarantee.
pub fn heuristic(cell: Cell, goal: Cell) -> f64 {
    cell.euclidean_distance(goal)
}
