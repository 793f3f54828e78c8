//! # Grid Chunks
//!
//! Coarse cubic blocks of cells, used to frame debug overlays around the agent.

use macroquad::math::Vec3;
use serde::{Deserialize, Serialize};

/// A cubic block of `size`³ cells.
///
/// Chunk `index` spans world coordinates `[index * size, (index + 1) * size)` on each axis.
///
/// # Examples
///
/// ```
/// use gridwalk::{Chunk, Vec3};
///
/// let chunk = Chunk::containing(Vec3::new(12.0, -3.0, 60.0), 50);
/// assert_eq!(chunk.center(), Vec3::new(25.0, -25.0, 75.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk coordinates (not cell coordinates)
    pub index: [i32; 3],
    /// Edge length in cells
    pub size: i32,
}

impl Chunk {
    /// Returns the chunk of the given size that contains `pos`.
    ///
    /// A non-positive size is treated as 1.
    pub fn containing(pos: Vec3, size: i32) -> Self {
        let size = size.max(1);
        let edge = size as f32;
        Self {
            index: [
                (pos.x / edge).floor() as i32,
                (pos.y / edge).floor() as i32,
                (pos.z / edge).floor() as i32,
            ],
            size,
        }
    }

    /// Minimum world corner of the chunk.
    pub fn min(&self) -> Vec3 {
        let edge = self.size as f32;
        Vec3::new(
            self.index[0] as f32 * edge,
            self.index[1] as f32 * edge,
            self.index[2] as f32 * edge,
        )
    }

    /// Maximum world corner of the chunk.
    pub fn max(&self) -> Vec3 {
        self.min() + Vec3::splat(self.size as f32)
    }

    /// World position of the chunk's center.
    pub fn center(&self) -> Vec3 {
        self.min() + Vec3::splat(self.size as f32 / 2.0)
    }

    /// Returns true if `pos` lies inside this chunk.
    pub fn contains(&self, pos: Vec3) -> bool {
        Chunk::containing(pos, self.size) == *self
    }
}
