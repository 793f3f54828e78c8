//! # Grid Cells
//!
//! Integer cell coordinates and the quantization that produces them.

use macroquad::math::Vec3;
use serde::{Deserialize, Serialize};

/// Represents a discrete cell of the 3D grid.
///
/// Cells are produced by flooring each axis of a world position, so the cell
/// `(x, y, z)` covers `[x, x + 1) × [y, y + 1) × [z, z + 1)`. Its representative
/// position is the integer corner `(x, y, z)` itself.
///
/// # Examples
///
/// ```
/// use gridwalk::{Cell, Vec3};
///
/// let cell = Cell::from_world(Vec3::new(2.5, 0.0, -0.5));
/// assert_eq!(cell, Cell::new(2, 0, -1));
///
/// let neighbors = cell.neighbors();
/// assert_eq!(neighbors.len(), 26); // 3x3x3 block minus the center
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    /// Creates a new cell with the given coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the origin cell (0, 0, 0).
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Quantizes a world position onto the grid by flooring each axis.
    ///
    /// Applying this to a cell's own [`position`](Self::position) returns the same cell.
    pub fn from_world(pos: Vec3) -> Self {
        Self::new(
            pos.x.floor() as i32,
            pos.y.floor() as i32,
            pos.z.floor() as i32,
        )
    }

    /// Representative world position of this cell, used as a waypoint.
    pub fn position(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Calculates the Euclidean distance to another cell.
    pub fn euclidean_distance(self, other: Cell) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        let dz = self.z as f64 - other.z as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Calculates the Chebyshev distance (number of 26-connected moves) to another cell.
    pub fn chebyshev_distance(self, other: Cell) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }

    /// Returns all 26 adjacent cells, including diagonal and vertical moves.
    ///
    /// Offsets are enumerated x-major, then y, then z, each from -1 to +1. At the
    /// edge of the `i32` range, offsets that would leave it are skipped.
    pub fn neighbors(self) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(26);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    if let Some(neighbor) = self.checked_offset(dx, dy, dz) {
                        neighbors.push(neighbor);
                    }
                }
            }
        }
        neighbors
    }

    /// Offsets the cell, or `None` if any axis would overflow.
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Cell> {
        Some(Cell::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// Returns true if `other` is one of the 26 neighbors of this cell.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Component-wise minimum.
    pub fn min(self, other: Cell) -> Cell {
        Cell::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Cell) -> Cell {
        Cell::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

/// Component-wise addition, saturating at the `i32` range.
impl std::ops::Add for Cell {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.saturating_add(other.x),
            self.y.saturating_add(other.y),
            self.z.saturating_add(other.z),
        )
    }
}

/// Component-wise subtraction, saturating at the `i32` range.
impl std::ops::Sub for Cell {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.saturating_sub(other.x),
            self.y.saturating_sub(other.y),
            self.z.saturating_sub(other.z),
        )
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
