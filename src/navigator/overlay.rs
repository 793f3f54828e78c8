//! # Debug Overlay
//!
//! A snapshot of navigation state for the rendering collaborator to draw.

use crate::grid::Chunk;
use crate::path::Path;
use macroquad::math::Vec3;

/// Everything a debug view needs to draw one agent's route.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugOverlay {
    /// Current agent position
    pub agent: Vec3,
    /// Last picked target, if any
    pub target: Option<Vec3>,
    /// Remaining route as line segments between consecutive waypoints
    pub segments: Vec<(Vec3, Vec3)>,
    /// Chunk containing the agent
    pub chunk: Chunk,
}

impl DebugOverlay {
    /// Captures the overlay for an agent at `agent` following `path`.
    pub fn capture(agent: Vec3, target: Option<Vec3>, path: &Path, chunk_size: i32) -> Self {
        Self {
            agent,
            target,
            segments: path.segments().collect(),
            chunk: Chunk::containing(agent, chunk_size),
        }
    }
}
